pub mod password;

pub use password::{
    generate_multiple_passwords, generate_multiple_passwords_with, generate_password,
    generate_password_with, RandomSource, WORDLIST,
};
