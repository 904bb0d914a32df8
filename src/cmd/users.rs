use crate::reports;
use clap::Args;
use std::path::PathBuf;
use tracing::info;
use yatrachain::users::UserDirectory;
use yatrachain::YcResult;

#[derive(Args, Debug, Clone)]
pub struct UsersArgs {
    /// Case-insensitive match on user id or category
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Show one user's trip history instead of the directory
    #[arg(short, long)]
    pub user: Option<String>,

    /// User directory (JSON). Defaults to the built-in sample.
    #[arg(long)]
    pub users_file: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &UsersArgs) -> YcResult<()> {
    let directory = match &args.users_file {
        Some(path) => {
            info!("📂 Loading users: {}", path.display());
            UserDirectory::load_from_file(path)?
        }
        None => UserDirectory::builtin()?,
    };

    if let Some(id) = &args.user {
        let history = directory.history(id)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&history)?);
        } else {
            reports::print_user_history(&history);
        }
        return Ok(());
    }

    let found = directory.search(&args.search);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        reports::print_user_directory(&found);
    }
    Ok(())
}
