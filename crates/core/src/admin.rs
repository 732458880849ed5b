//! Admin registry.
//!
//! Static per-model settings for the admin screens: list columns, search
//! fields, paging, editable fields and inline child forms. The server
//! exposes the registry read-only and consults it for add permission,
//! page size and inline bounds.

use serde::Serialize;

/// Page size for models that do not override it.
pub const DEFAULT_LIST_PER_PAGE: usize = 100;

/// Child form edited together with its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InlineAdmin {
    pub model: &'static str,
    /// Blank rows shown by default.
    pub extra: usize,
    pub min_num: usize,
    pub max_num: Option<usize>,
    pub autocomplete_fields: &'static [&'static str],
}

/// List and form settings for one registered model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelAdmin {
    pub model: &'static str,
    pub list_display: &'static [&'static str],
    pub search_fields: &'static [&'static str],
    pub list_per_page: usize,
    pub fields: &'static [&'static str],
    pub readonly_fields: &'static [&'static str],
    pub exclude: &'static [&'static str],
    pub can_add: bool,
    pub inlines: &'static [InlineAdmin],
}

impl ModelAdmin {
    const fn new(model: &'static str) -> Self {
        Self {
            model,
            list_display: &[],
            search_fields: &[],
            list_per_page: DEFAULT_LIST_PER_PAGE,
            fields: &[],
            readonly_fields: &[],
            exclude: &[],
            can_add: true,
            inlines: &[],
        }
    }

    pub fn has_add_permission(&self) -> bool {
        self.can_add
    }
}

pub const ALARM_ACTION_INLINE: InlineAdmin = InlineAdmin {
    model: "AlarmAction",
    extra: 0,
    min_num: 1,
    max_num: None,
    autocomplete_fields: &["arn"],
};

pub const ALARM_DIMENSION_INLINE: InlineAdmin = InlineAdmin {
    model: "AlarmDimension",
    extra: 0,
    min_num: 1,
    max_num: Some(30),
    autocomplete_fields: &["dimension"],
};

pub const BUG_OWNER_INLINE: InlineAdmin = InlineAdmin {
    model: "BugOwner",
    extra: 1,
    min_num: 0,
    max_num: None,
    autocomplete_fields: &["user"],
};

pub const ALARM_ADMIN: ModelAdmin = ModelAdmin {
    list_display: &["alarm_id", "name"],
    inlines: &[ALARM_ACTION_INLINE, ALARM_DIMENSION_INLINE],
    ..ModelAdmin::new("Alarm")
};

pub const ALERT_SOURCE_ADMIN: ModelAdmin = ModelAdmin {
    list_display: &["arn_id", "name", "value"],
    search_fields: &["value"],
    exclude: &["arn_id"],
    ..ModelAdmin::new("AlertSource")
};

pub const DIMENSION_ADMIN: ModelAdmin = ModelAdmin {
    list_display: &["dimension_id", "value"],
    search_fields: &["value"],
    ..ModelAdmin::new("Dimension")
};

pub const BUG_ADMIN: ModelAdmin = ModelAdmin {
    list_display: &["bug_id", "resolved", "created_at", "developers", "lambda_name"],
    fields: &["bug_id", "resolved"],
    readonly_fields: &["dimension", "bug_id"],
    can_add: false,
    inlines: &[BUG_OWNER_INLINE],
    ..ModelAdmin::new("Bug")
};

pub const DEVELOPER_ADMIN: ModelAdmin = ModelAdmin {
    list_display: &["user_id", "user"],
    search_fields: &["user__username"],
    list_per_page: 10,
    ..ModelAdmin::new("Developer")
};

pub const USER_ADMIN: ModelAdmin = ModelAdmin {
    list_display: &["id", "username"],
    search_fields: &["username"],
    ..ModelAdmin::new("User")
};

/// Every registered model, in menu order.
pub const REGISTRY: &[ModelAdmin] = &[
    ALARM_ADMIN,
    ALERT_SOURCE_ADMIN,
    DIMENSION_ADMIN,
    BUG_ADMIN,
    DEVELOPER_ADMIN,
    USER_ADMIN,
];

/// Looks up a registered model by name, ignoring case.
pub fn find_model(name: &str) -> Option<&'static ModelAdmin> {
    REGISTRY
        .iter()
        .find(|admin| admin.model.eq_ignore_ascii_case(name))
}
