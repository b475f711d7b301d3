use minilearn::{Dataset, LinearRegression, Matrix, TrainConfig, Vector};
use ndarray::Axis;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Step 1: Synthesize data from y = 3 + 2*x1 - x2 plus uniform noise
    let mut rng = StdRng::seed_from_u64(1);
    let features = Matrix::random_using((120, 2), Uniform::new(-3.0, 3.0), &mut rng);
    let noise = Vector::random_using(120, Uniform::new(-0.2, 0.2), &mut rng);
    let labels = features.map_axis(Axis(1), |row| 3.0 + 2.0 * row[0] - row[1]) + noise;

    // Step 2: Shuffle and hold out a test split
    let mut dataset = Dataset::new(features, labels)?;
    dataset.shuffle(42);
    let (train, test) = dataset.train_test_split(0.2)?;
    println!(
        "Dataset: {} train samples, {} test samples, {} features",
        train.n_samples(),
        test.n_samples(),
        train.n_features()
    );

    // Step 3: Train with mini-batch gradient descent
    let config = TrainConfig::new(12).learning_rate(0.1).iterations(300);
    let mut model = LinearRegression::new(config);
    model.fit(&train.features, &train.labels)?;

    // Step 4: Evaluate
    let train_r2 = model.score(&train.features, &train.labels)?;
    let test_r2 = model.score(&test.features, &test.labels)?;

    println!("Results:");
    println!("  Training R² score: {:.4}", train_r2);
    println!("  Test R² score: {:.4}", test_r2);
    println!("  Final MSE: {:.6}", model.loss_history[0]);
    println!(
        "  Weights (intercept first): {:?}",
        model.weights.as_ref().unwrap()
    );

    Ok(())
}
