use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                h2 { class: "hero__title", "Psychological testing" }
                p { class: "hero__subtitle",
                    "Professional psychodiagnostic tools for understanding personality, "
                    "identifying character traits, and mapping psychological profiles."
                }
                div { class: "hero__actions",
                    button {
                        class: "btn btn-primary",
                        id: "home-start-test",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Test {});
                        },
                        "Take the MMPI Test"
                    }
                }
            }

            section { class: "feature-grid",
                FeatureCard {
                    title: "Scientific basis",
                    body: "Built on established methods and decades of research in psychology.",
                }
                FeatureCard {
                    title: "Detailed profiles",
                    body: "Scale-by-scale analysis of personality traits with an interpretation for each.",
                }
                FeatureCard {
                    title: "Confidentiality",
                    body: "Nothing is stored. A session lives in memory and vanishes when you close the app.",
                }
            }

            section { class: "applications",
                h3 { "Where testing is used" }
                div { class: "application-grid",
                    ApplicationCard { title: "HR and recruiting", body: "Candidate assessment" }
                    ApplicationCard { title: "Education", body: "Career guidance" }
                    ApplicationCard { title: "Clinical work", body: "Screening of conditions" }
                    ApplicationCard { title: "Family therapy", body: "Working with couples" }
                }
            }

            footer { class: "home-footer",
                p { "Demo only. Scores are illustrative and carry no diagnostic meaning." }
            }
        }
    }
}

#[component]
fn FeatureCard(title: &'static str, body: &'static str) -> Element {
    rsx! {
        div { class: "card feature-card",
            h4 { "{title}" }
            p { "{body}" }
        }
    }
}

#[component]
fn ApplicationCard(title: &'static str, body: &'static str) -> Element {
    rsx! {
        div { class: "card application-card",
            h4 { "{title}" }
            p { "{body}" }
        }
    }
}
