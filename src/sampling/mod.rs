mod gaussian_noise;
mod noise_source;

pub use gaussian_noise::GaussianNoise;
pub use noise_source::NoiseSource;
