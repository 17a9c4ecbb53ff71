use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn header(user: Option<&str>) -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href=(names::LESSON_LIST_URL) {
                            strong { "Studyhall" }
                        }
                    }
                }
                ul {
                    @if let Some(name) = user {
                        li."secondary" { (name) }
                        li {
                            button."secondary outline"
                                   hx-post=(names::LOGOUT_URL)
                                   hx-target="body" {
                                "Log out"
                            }
                        }
                    }
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup, user: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (js())
            (icon())

            title { (format!("{title} - Studyhall")) }
        }

        body."container" {
            (header(user))
            (main(body))
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - Studyhall" }
        (body)
    }
}

/// Full page for direct navigation, title-plus-fragment for htmx swaps.
pub fn render(is_htmx: bool, title: &str, body: Markup, user: Option<&str>) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body, user)
    }
}
