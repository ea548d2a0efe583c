//! Server command implementation

use std::path::Path;

use anyhow::Result;

use super::open_db;

pub async fn cmd_serve(
    db_path: &Path,
    host: &str,
    port: u16,
    no_auth: bool,
    no_encrypt: bool,
) -> Result<()> {
    println!("🚀 Starting Fintrack web server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", host, port);

    let jwt_secret = std::env::var(fintrack_server::JWT_SECRET_ENV).unwrap_or_default();

    if no_auth {
        println!();
        println!("   ⚠️  Authentication DISABLED - do not expose to network!");
    } else if jwt_secret.is_empty() {
        println!(
            "   🔑 Set {} to sign bearer tokens (required with auth enabled)",
            fintrack_server::JWT_SECRET_ENV
        );
    } else {
        println!("   🔒 Authentication: bearer tokens (register/login to obtain one)");
    }
    if no_encrypt {
        println!("   ⚠️  Encryption DISABLED (--no-encrypt)");
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let db = open_db(db_path, no_encrypt)?;

    let config = fintrack_server::ServerConfig {
        require_auth: !no_auth,
        allowed_origins: vec![],
        jwt_secret,
    };

    fintrack_server::serve_with_config(db, host, port, config).await?;

    Ok(())
}
