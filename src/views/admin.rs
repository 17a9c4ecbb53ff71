use maud::{html, Markup};

use crate::db::{LessonSummary, QuizOverview, Tag};
use crate::names;

pub struct AdminDashboardData {
    pub lessons: Vec<LessonSummary>,
    pub quizzes: Vec<QuizOverview>,
    pub tags: Vec<Tag>,
    pub notice: Option<String>,
}

pub fn dashboard(data: AdminDashboardData) -> Markup {
    html! {
        h1 { "Content Management" }

        @if let Some(notice) = &data.notice {
            p."incorrect" { (notice) }
        }

        article {
            h4 { "New lesson" }
            form hx-post=(names::ADMIN_LESSON_URL) hx-target="main" {
                fieldset {
                    label { "Title" input type="text" name="title" required; }
                    label { "Body" textarea name="body" rows="4" {} }
                    label { "Tags (comma-separated)" input type="text" name="tags"; }
                }
                button type="submit" { "Create lesson" }
            }
        }

        article {
            h4 { "New quiz" }
            form hx-post=(names::ADMIN_QUIZ_URL) hx-target="main" {
                fieldset {
                    label {
                        "Lesson"
                        select name="lesson_id" required {
                            @for lesson in &data.lessons {
                                option value=(lesson.id) { (lesson.title) }
                            }
                        }
                    }
                    label { "Title" input type="text" name="title" required; }
                }
                button type="submit" { "Create quiz" }
            }
        }

        article {
            h4 { "New question" }
            form hx-post=(names::ADMIN_QUESTION_URL) hx-target="main" {
                fieldset {
                    label {
                        "Quiz"
                        select name="quiz_id" required {
                            @for quiz in &data.quizzes {
                                option value=(quiz.id) {
                                    (quiz.lesson_title) ": " (quiz.title)
                                }
                            }
                        }
                    }
                    label { "Body" textarea name="body" rows="2" {} }
                    label {
                        input type="checkbox" name="correct_answer" value="true";
                        "The correct answer is True"
                    }
                }
                button type="submit" { "Create question" }
            }
        }

        article {
            h4 { "New tag" }
            form hx-post=(names::ADMIN_TAG_URL) hx-target="main" {
                fieldset {
                    label { "Name" input type="text" name="name"; }
                }
                button type="submit" { "Create tag" }
            }
            @if !data.tags.is_empty() {
                p {
                    @for tag in &data.tags {
                        span."tag" { (tag.name) }
                    }
                }
            }
        }

        article {
            h4 { "Import lesson (JSON)" }
            form hx-post=(names::ADMIN_IMPORT_URL) hx-target="main" {
                fieldset {
                    label {
                        "Lesson document"
                        textarea name="document" rows="8"
                                 placeholder=r#"{"title": "...", "body": "...", "quizzes": [...]}"# {}
                    }
                }
                button type="submit" { "Import" }
            }
        }
    }
}
