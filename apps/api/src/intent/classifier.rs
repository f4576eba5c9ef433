//! Maps a free-text question to an `Intent` via an ordered table of keyword
//! rules. The first rule with a substring hit wins.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    AllUsers,
    InactiveUsers,
    ActiveUsers,
    UserCount,
    AdminUserCount,
    AdminUsers,
    UserSummary,
    Unknown,
}

/// What a rule yields once one of its keywords matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    To(Intent),
    /// `qualified` if the question also contains `qualifier`, else `otherwise`.
    Qualified {
        qualifier: &'static str,
        qualified: Intent,
        otherwise: Intent,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub keywords: &'static [&'static str],
    pub route: Route,
}

impl IntentRule {
    /// `question` must already be lower-cased.
    fn apply(&self, question: &str) -> Option<Intent> {
        if !self.keywords.iter().any(|k| question.contains(k)) {
            return None;
        }
        Some(match self.route {
            Route::To(intent) => intent,
            Route::Qualified {
                qualifier,
                qualified,
                otherwise,
            } => {
                if question.contains(qualifier) {
                    qualified
                } else {
                    otherwise
                }
            }
        })
    }
}

/// Rules in priority order.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        keywords: &["all users", "show users", "list users", "user list"],
        route: Route::To(Intent::AllUsers),
    },
    IntentRule {
        keywords: &[
            "inactive",
            "not logged",
            "not active",
            "dormant",
            "no recent activity",
        ],
        route: Route::To(Intent::InactiveUsers),
    },
    IntentRule {
        keywords: &[
            "active users",
            "recent users",
            "recently active",
            "logged in recently",
        ],
        route: Route::To(Intent::ActiveUsers),
    },
    IntentRule {
        keywords: &["count", "how many", "total number", "number of"],
        route: Route::Qualified {
            qualifier: "admin",
            qualified: Intent::AdminUserCount,
            otherwise: Intent::UserCount,
        },
    },
    IntentRule {
        keywords: &["admin users", "administrators", "admin accounts"],
        route: Route::To(Intent::AdminUsers),
    },
    IntentRule {
        keywords: &["summary", "statistics", "overview", "dashboard", "status"],
        route: Route::To(Intent::UserSummary),
    },
];

pub fn classify(question: &str) -> Intent {
    let question = question.to_lowercase();
    INTENT_RULES
        .iter()
        .find_map(|rule| rule.apply(&question))
        .unwrap_or(Intent::Unknown)
}
