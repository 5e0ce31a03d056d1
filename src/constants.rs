// Messages
pub const MESSAGE_CURRENCY_NOT_FOUND: &str = "Currency not found";
pub const MESSAGE_CURRENCY_UPDATED: &str = "Currency updated";
pub const MESSAGE_CURRENCY_DELETED: &str = "Currency deleted";
pub const MESSAGE_CURRENCY_IN_USE: &str = "Currency is still referenced by other records";
pub const MESSAGE_USER_NOT_FOUND: &str = "User not found";
pub const MESSAGE_USER_UPDATED: &str = "User updated";
pub const MESSAGE_TRANSACTION_NOT_FOUND: &str = "Transaction not found";

// Constraint names, as created by the migrations
pub const CURRENCIES_CODE_KEY: &str = "currencies_code_key";
pub const USERS_USERNAME_KEY: &str = "users_username_key";
pub const USERS_EMAIL_KEY: &str = "users_email_key";
pub const USERS_DEFAULT_CURRENCY_FKEY: &str = "users_default_currency_id_fkey";
pub const TRANSACTIONS_CURRENCY_FKEY: &str = "transactions_currency_id_fkey";
pub const TRANSACTIONS_USER_FKEY: &str = "transactions_user_id_fkey";
