fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let presenter_factory = modtimes::PixelsPresenterFactory::default();
    let command = modtimes::GuiCommand::new(presenter_factory);

    command.run()?;

    Ok(())
}
