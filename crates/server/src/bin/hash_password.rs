//! Print an argon2 hash for a `[[accounts]]` entry in `config.toml`.
//!
//! Usage: `cargo run -p server --features server --bin hash-password -- <password>`

use server::auth::password::hash_password;

fn main() {
    let Some(password) = std::env::args().nth(1) else {
        eprintln!("usage: hash-password <password>");
        std::process::exit(2);
    };
    match hash_password(&password) {
        Ok(hash) => println!("{hash}"),
        Err(e) => {
            eprintln!("failed to hash password: {e}");
            std::process::exit(1);
        }
    }
}
