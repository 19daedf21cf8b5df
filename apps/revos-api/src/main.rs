use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = revos_api::Args::parse();
	revos_api::run(args).await
}
