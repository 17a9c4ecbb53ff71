use maud::{html, Markup};

use crate::names;

pub enum LoginState {
    NoError,
    IncorrectPassword,
}

pub enum RegisterState {
    NoError,
    EmptyFields,
    EmailTaken,
}

pub fn login_form(state: LoginState) -> Markup {
    html! {
        h1 { "Log In" }

        @if let LoginState::IncorrectPassword = state {
            p."incorrect" { "Incorrect email or password." }
        }

        form hx-post=(names::LOGIN_URL) hx-target="main" {
            fieldset {
                label {
                    "Email"
                    input type="email" name="email" required autocomplete="email";
                }
                label {
                    "Password"
                    input type="password" name="password" required autocomplete="current-password";
                }
            }
            button type="submit" { "Log in" }
        }

        p {
            "No account yet? "
            a href=(names::REGISTER_URL) { "Register" }
        }
    }
}

pub fn register_form(state: RegisterState) -> Markup {
    html! {
        h1 { "Register" }

        @match state {
            RegisterState::NoError => {}
            RegisterState::EmptyFields => {
                p."incorrect" { "All fields are required." }
            }
            RegisterState::EmailTaken => {
                p."incorrect" { "That email is already registered." }
            }
        }

        form hx-post=(names::REGISTER_URL) hx-target="main" {
            fieldset {
                label {
                    "Display name"
                    input type="text" name="display_name" required;
                }
                label {
                    "Email"
                    input type="email" name="email" required autocomplete="email";
                }
                label {
                    "Password"
                    input type="password" name="password" required autocomplete="new-password";
                }
            }
            button type="submit" { "Register" }
        }

        p {
            "Already have an account? "
            a href=(names::LOGIN_URL) { "Log in" }
        }
    }
}
