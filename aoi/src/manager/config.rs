#[derive(Debug, Clone)]
pub struct Config {
    pub range_x: f32,
    pub range_y: f32,
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            range_x: 0.0,
            range_y: 0.0,
            capacity: 1024,
        }
    }
}
