//! # Authentication Screen
//!
//! Login and registration forms, plus the federated-login hand-off.

use crate::app::{App, AppState, AuthState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

const FIELD_SIZE: [f32; 2] = [280.0, 28.0];

/// Render the auth screen
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &App, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(
            egui::RichText::new("QuoteDeck")
                .size(32.0)
                .strong()
                .color(theme.selected),
        );
        ui.add_space(30.0);

        match &state.auth {
            AuthState::Login {
                identifier,
                password,
                error,
            } => render_login(ui, app, theme, identifier, password, error),
            AuthState::Register {
                username,
                email,
                password,
                confirm_password,
                error,
            } => render_register(
                ui,
                app,
                theme,
                username,
                email,
                password,
                confirm_password,
                error,
            ),
        }
    });
}

fn render_login(
    ui: &mut egui::Ui,
    app: &App,
    theme: &Theme,
    identifier: &str,
    password: &str,
    error: &Option<String>,
) {
    forms::render_form_heading(ui, "Sign In", theme);

    // Local copies feed back through handlers so the state write stays on
    // the app side.
    let mut identifier_input = identifier.to_string();
    let mut password_input = password.to_string();

    let id_changed = forms::render_text_input(
        ui,
        "Username or email",
        &mut identifier_input,
        "you@example.com",
        false,
        FIELD_SIZE,
    )
    .changed();
    ui.add_space(8.0);
    let pw_response = forms::render_text_input(
        ui,
        "Password",
        &mut password_input,
        "",
        true,
        FIELD_SIZE,
    );
    ui.add_space(14.0);

    if id_changed || pw_response.changed() {
        let mut state = app.state.write();
        if let AuthState::Login {
            identifier,
            password,
            ..
        } = &mut state.auth
        {
            *identifier = identifier_input.clone();
            *password = password_input.clone();
        }
    }

    if let Some(error) = error {
        forms::render_error(ui, error, theme);
    }

    let submitted = pw_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    if forms::render_button(ui, "Sign In", Some(theme.selected.linear_multiply(0.6)), None)
        .clicked()
        || submitted
    {
        app.handle_login_click(identifier_input, password_input);
    }

    ui.add_space(10.0);
    if forms::render_button(ui, "Continue with Google", None, None).clicked() {
        app.handle_provider_click("google");
    }

    ui.add_space(16.0);
    forms::render_hint(ui, "No account yet?", theme);
    if ui.link("Create one").clicked() {
        app.handle_switch_to_register();
    }
}

#[allow(clippy::too_many_arguments)]
fn render_register(
    ui: &mut egui::Ui,
    app: &App,
    theme: &Theme,
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
    error: &Option<String>,
) {
    forms::render_form_heading(ui, "Create Account", theme);

    let mut username_input = username.to_string();
    let mut email_input = email.to_string();
    let mut password_input = password.to_string();
    let mut confirm_input = confirm_password.to_string();

    let mut changed = false;
    changed |= forms::render_text_input(ui, "Username", &mut username_input, "", false, FIELD_SIZE)
        .changed();
    ui.add_space(8.0);
    changed |= forms::render_text_input(
        ui,
        "Email",
        &mut email_input,
        "you@example.com",
        false,
        FIELD_SIZE,
    )
    .changed();
    ui.add_space(8.0);
    changed |=
        forms::render_text_input(ui, "Password", &mut password_input, "", true, FIELD_SIZE)
            .changed();
    ui.add_space(8.0);
    changed |= forms::render_text_input(
        ui,
        "Confirm password",
        &mut confirm_input,
        "",
        true,
        FIELD_SIZE,
    )
    .changed();
    ui.add_space(14.0);

    if changed {
        let mut state = app.state.write();
        if let AuthState::Register {
            username,
            email,
            password,
            confirm_password,
            ..
        } = &mut state.auth
        {
            *username = username_input.clone();
            *email = email_input.clone();
            *password = password_input.clone();
            *confirm_password = confirm_input.clone();
        }
    }

    if let Some(error) = error {
        forms::render_error(ui, error, theme);
    }

    if forms::render_button(
        ui,
        "Create Account",
        Some(theme.selected.linear_multiply(0.6)),
        None,
    )
    .clicked()
    {
        app.handle_register_click(username_input, email_input, password_input, confirm_input);
    }

    ui.add_space(16.0);
    forms::render_hint(ui, "Already registered?", theme);
    if ui.link("Sign in").clicked() {
        app.handle_switch_to_login();
    }
}
