//! gitform - Git repository state behind a Terraform-style plan lifecycle.

fn main() {
    if let Err(err) = gitform::cli::run() {
        gitform::ui::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
