use clap::Parser;

use mindcheck_api::mint::MintTokenArgs;

fn main() -> eyre::Result<()> {
    let args = MintTokenArgs::parse();
    let secret = std::env::var("MINDCHECK_TOKEN_SECRET")
        .map_err(|_| eyre::eyre!("MINDCHECK_TOKEN_SECRET must be set"))?;

    println!("{}", args.mint(secret.as_bytes())?);
    Ok(())
}
