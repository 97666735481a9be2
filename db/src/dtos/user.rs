pub struct UserCreateRequest {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}
