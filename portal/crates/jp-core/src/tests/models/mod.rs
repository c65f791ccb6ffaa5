mod application_status;
mod credentials;
mod role;
mod timestamp;
mod user;
