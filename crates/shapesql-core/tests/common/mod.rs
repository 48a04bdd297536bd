#![allow(dead_code)]

use shapesql_core::node::{TypeNode, array, bigint, boolean, date, number, object, string};

/// `{name: string}`
pub fn single_string() -> TypeNode {
    object([("name", string())])
}

/// `{name, age, active, createdAt}` with every field required.
pub fn primitives() -> TypeNode {
    object([
        ("name", string()),
        ("age", number()),
        ("active", boolean()),
        ("createdAt", date()),
    ])
}

/// `{user: {profile: {email, age}}}`
pub fn deeply_nested() -> TypeNode {
    object([(
        "user",
        object([("profile", object([("email", string()), ("age", number())]))]),
    )])
}

/// Everything at once: leaves, wrappers, nesting and dropped arrays.
pub fn account() -> TypeNode {
    object([
        ("id", bigint()),
        ("name", string()),
        ("isActive", boolean()),
        ("lastLogin", date().nullable()),
        ("nickname", string().optional()),
        ("tags", array(string())),
        (
            "settings",
            object([
                ("theme", string()),
                ("notifications", boolean()),
                ("history", array(object([("at", date())]))),
            ]),
        ),
        ("address", object([("city", string()), ("zip", number().optional())]).nullable()),
    ])
}
