use std::env;

use adaline::{Adaline, TrainingConfig};
use anyhow::Context;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => TrainingConfig::load(&path)
            .with_context(|| format!("failed to load the training config from '{path}'"))?,
        None => {
            info!("no config given, training on the built-in dataset");
            TrainingConfig::default()
        }
    };

    let dataset = config.dataset.build().context("failed to build the dataset")?;
    info!(
        "training on {} samples with {} features for {} epochs",
        dataset.n_samples(),
        dataset.n_features(),
        config.epochs
    );

    let mut adaline = Adaline::from_config(&config.model);
    let accuracy = adaline
        .fit_dataset(&dataset, config.epochs.get())?
        .score(dataset.x(), dataset.y())?;
    info!("training accuracy: {:.2}%", accuracy * 100.);

    let report = adaline
        .report()
        .context("the classifier is not fitted after training")?;
    if let Some(loss) = report.final_loss() {
        info!("final loss: {loss}");
    }
    println!("{}", report.to_json()?);

    Ok(())
}
