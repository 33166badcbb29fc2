pub mod cognito {
    pub const SUB_FIELD: &str = "sub";
    pub const EMAIL_FIELD: &str = "email";
    pub const EMAIL_VERIFIED_FIELD: &str = "email_verified";
    pub const ROLE_FIELD: &str = "custom:role";
    pub const ADMIN_GROUP: &str = "admin";
}

pub mod dynamodb {
    pub const USER_ID_FIELD: &str = "user_id";
}

pub mod request {
    pub const EMAIL: &str = "email";
    pub const USERNAME: &str = "username";
}
