use maud::{html, Markup};

use crate::db::{Lesson, LessonSummary, Quiz, Tag};
use crate::names;

pub fn lesson_list(lessons: Vec<LessonSummary>) -> Markup {
    html! {
        h1 { "Lessons" }

        @if lessons.is_empty() {
            p { "No lessons yet." }
        } @else {
            table {
                thead { tr {
                    th { "Lesson" }
                    th { "Quizzes" }
                } }
                tbody {
                    @for lesson in &lessons {
                        tr {
                            td {
                                a hx-get=(names::lesson_url(lesson.id))
                                  hx-push-url="true"
                                  hx-target="main"
                                  href=(names::lesson_url(lesson.id)) {
                                    (lesson.title)
                                }
                            }
                            td { (lesson.quiz_count) }
                        }
                    }
                }
            }
        }
    }
}

pub fn lesson_detail(lesson: Lesson, tags: Vec<Tag>, quizzes: Vec<Quiz>) -> Markup {
    html! {
        h1 { (lesson.title) }

        @if !tags.is_empty() {
            p {
                @for tag in &tags {
                    span."tag" { (tag.name) }
                }
            }
        }

        article { (lesson.body) }

        h2 { "Quizzes" }
        @if quizzes.is_empty() {
            p { "This lesson has no quizzes yet." }
        } @else {
            ul {
                @for quiz in &quizzes {
                    li {
                        a hx-get=(names::quiz_url(quiz.id))
                          hx-push-url="true"
                          hx-target="main"
                          href=(names::quiz_url(quiz.id)) {
                            (quiz.title)
                        }
                    }
                }
            }
        }

        p {
            a href=(names::LESSON_LIST_URL) { "Back to lessons" }
        }
    }
}
