use minilearn::{Dataset, LogisticRegression, Matrix, TrainConfig};
use ndarray::Axis;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Step 1: Two classes separated by the line x1 + x2 = 0
    let mut rng = StdRng::seed_from_u64(3);
    let features = Matrix::random_using((100, 2), Uniform::new(-2.0, 2.0), &mut rng);
    let labels = features.map_axis(Axis(1), |row| if row[0] + row[1] > 0.0 { 1.0 } else { 0.0 });

    // Step 2: Shuffle and hold out a test split
    let mut dataset = Dataset::new(features, labels)?;
    dataset.shuffle(42);
    let (train, test) = dataset.train_test_split(0.25)?;

    // Step 3: Train; the learning rate adapts on its own, so the initial
    // value barely matters
    let config = TrainConfig::new(10).learning_rate(0.5).iterations(100);
    let mut model = LogisticRegression::new(config).decision_boundary(0.5);
    model.fit(&train.features, &train.labels)?;

    // Step 4: Evaluate
    let train_accuracy = model.score(&train.features, &train.labels)?;
    let test_accuracy = model.score(&test.features, &test.labels)?;

    println!("Results:");
    println!("  Training accuracy: {:.4}", train_accuracy);
    println!("  Test accuracy: {:.4}", test_accuracy);
    println!("  Final log-loss: {:.6}", model.loss_history[0]);

    Ok(())
}
