use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLeaf, LdSettings, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{DashboardScreen, DashboardSummary, RoleCode};
use shared_ui::{
    AppShell, Badge, BadgeTone, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, PageHeader, Spinner, StatCard,
};

use super::content::{self, StaticStat};

const ICON_SIZE: u32 = 16;

/// Renders one [`DashboardScreen`]. Holds no state of its own.
#[component]
pub fn DashboardView(screen: DashboardScreen, on_sign_out: EventHandler<MouseEvent>) -> Element {
    match screen {
        DashboardScreen::Loading => rsx! {
            div { class: "dashboard-loading",
                Spinner { label: "Loading dashboard" }
            }
        },
        DashboardScreen::Blank => rsx! {},
        DashboardScreen::Content(summary) => rsx! {
            document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
            AppShell {
                brand: content::BRAND.to_string(),
                actions: rsx! {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |evt| on_sign_out.call(evt),
                        "Sign out"
                    }
                },
                DashboardContent { summary }
            }
        },
    }
}

#[component]
fn DashboardContent(summary: DashboardSummary) -> Element {
    rsx! {
        div { class: "dashboard-page",
            PageHeader { title: content::HEADING.to_string(), tagline: content::TAGLINE.to_string() }
            p { class: "dashboard-greeting",
                "Welcome back, "
                strong { "{summary.greeting_name}" }
                span { class: "dashboard-date", "{summary.date_label}" }
            }

            div { class: "dashboard-stats",
                StatCard {
                    title: content::ROLES_TITLE.to_string(),
                    value: "{summary.role_count}",
                    caption: summary.role_labels.clone(),
                    icon: rsx! { Icon { icon: LdUsers, width: ICON_SIZE, height: ICON_SIZE } },
                    footer: rsx! {
                        if !summary.roles.is_empty() {
                            div { class: "dashboard-role-badges",
                                for role in summary.roles.iter().copied() {
                                    RoleBadge { key: "{role:?}", role }
                                }
                            }
                        }
                    },
                }
                FixedStat {
                    stat: content::MODULES_STAT,
                    icon: rsx! { Icon { icon: LdLeaf, width: ICON_SIZE, height: ICON_SIZE } },
                }
                FixedStat {
                    stat: content::CONFIGURATION_STAT,
                    icon: rsx! { Icon { icon: LdSettings, width: ICON_SIZE, height: ICON_SIZE } },
                }
            }

            GettingStarted {}
        }
    }
}

#[component]
fn RoleBadge(role: RoleCode) -> Element {
    let label = role.label();
    let code = role.as_str();
    rsx! {
        Badge { tone: BadgeTone::Soft, title: "{code}", "{label}" }
    }
}

#[component]
fn FixedStat(stat: StaticStat, icon: Element) -> Element {
    rsx! {
        StatCard {
            title: stat.title.to_string(),
            value: stat.value.to_string(),
            caption: stat.caption.to_string(),
            icon,
        }
    }
}

#[component]
fn GettingStarted() -> Element {
    rsx! {
        Card { class: "dashboard-getting-started",
            CardHeader {
                CardTitle { {content::GETTING_STARTED_TITLE} }
                CardDescription { {content::GETTING_STARTED_DESCRIPTION} }
            }
            CardContent {
                FeatureList { title: content::COMPLETED_TITLE, items: content::COMPLETED_FEATURES }
                FeatureList { title: content::COMING_NEXT_TITLE, items: content::COMING_NEXT }
            }
        }
    }
}

#[component]
fn FeatureList(title: &'static str, items: &'static [&'static str]) -> Element {
    rsx! {
        section { class: "dashboard-feature-list",
            h3 { "{title}" }
            ul {
                for item in items.iter() {
                    li { key: "{item}", "{item}" }
                }
            }
        }
    }
}
