pub mod simulation;
pub mod configuration;
pub mod rendering;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2, NVec3, BODY_COUNT};
pub use simulation::forces::{Force, ForceSet, NewtonianGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, RenderConfig, ScenarioConfig};

pub use rendering::canvas::Canvas;
pub use rendering::disk::{DiskMask, DISK_RADIUS};
pub use rendering::renderer::Renderer;
pub use rendering::stream::FrameStream;

pub use benchmark::benchmark::{bench_forces, bench_frames};
