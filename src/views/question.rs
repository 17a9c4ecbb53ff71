use maud::{html, Markup};

use crate::db::{Answer, Question};
use crate::names;

/// The question page shows the answer form until the user has answered,
/// after which it shows the recorded choice and its correctness.
pub fn question_detail(question: &Question, user_answer: Option<&Answer>) -> Markup {
    html! {
        h1 { "True or false?" }

        blockquote { (question.body) }

        @match user_answer {
            Some(answer) => {
                p {
                    "You answered "
                    strong { (if answer.choice { "True" } else { "False" }) }
                    ". "
                    @if answer.is_correct {
                        span."correct" { "Correct!" }
                    } @else {
                        span."incorrect" { "Incorrect." }
                    }
                }
                button hx-get=(names::quiz_url(question.quiz_id))
                       hx-push-url="true"
                       hx-target="main" {
                    "Back to quiz"
                }
            }
            None => {
                form."answer-form" hx-post=(names::answer_create_url(question.id))
                                   hx-target="main" {
                    fieldset {
                        label {
                            input type="radio" name="choice" value="true" required;
                            "True"
                        }
                        label {
                            input type="radio" name="choice" value="false";
                            "False"
                        }
                    }
                    button type="submit" { "Submit answer" }
                }
            }
        }
    }
}
