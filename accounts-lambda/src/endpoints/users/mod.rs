pub mod create;
pub mod delete;
pub mod get;
pub mod update;

/// Parses the numeric id out of `/users/{id}`.
pub fn path_id(path: &str) -> Option<i64> {
    path.strip_prefix("/users/")
        .filter(|id| !id.contains('/'))
        .and_then(|id| id.parse::<i64>().ok())
        .filter(|id| *id > 0)
}
