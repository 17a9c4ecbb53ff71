use maud::{html, Markup};

use crate::db::{AnswerReport, Question, Quiz, Score};
use crate::names;

pub struct QuizDetailData {
    pub quiz: Quiz,
    pub questions: Vec<Question>,
    /// True when every question in the quiz has been answered by this user.
    pub done: bool,
}

pub fn quiz_detail(data: QuizDetailData) -> Markup {
    html! {
        h1 { (data.quiz.title) }

        @if data.done {
            p."correct" { "You have answered every question in this quiz." }
            button hx-get=(names::quiz_answers_url(data.quiz.id))
                   hx-push-url="true"
                   hx-target="main" {
                "See your answers and score"
            }
        } @else {
            p { (data.questions.len()) " questions" }
        }

        ol {
            @for question in &data.questions {
                li {
                    a hx-get=(names::question_url(question.id))
                      hx-push-url="true"
                      hx-target="main"
                      href=(names::question_url(question.id)) {
                        (question.body)
                    }
                }
            }
        }

        p {
            a href=(names::lesson_url(data.quiz.lesson_id)) { "Back to lesson" }
        }
    }
}

pub fn answer_list(quiz: &Quiz, answers: Vec<AnswerReport>, score: Score) -> Markup {
    html! {
        h1 { (quiz.title) ": your answers" }

        p {
            "Score: " strong { (score) }
        }

        @if answers.is_empty() {
            p { "You have not answered any questions in this quiz." }
        } @else {
            table {
                thead { tr {
                    th { "Question" }
                    th { "Your choice" }
                    th { "Result" }
                } }
                tbody {
                    @for answer in &answers {
                        tr {
                            td { (answer.question_body) }
                            td { (if answer.choice { "True" } else { "False" }) }
                            td {
                                @if answer.is_correct {
                                    span."correct" { "Correct" }
                                } @else {
                                    span."incorrect" { "Incorrect" }
                                }
                            }
                        }
                    }
                }
            }
        }

        p {
            a href=(names::quiz_url(quiz.id)) { "Back to quiz" }
        }
    }
}
