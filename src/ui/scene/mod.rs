mod intent;
mod reducer;
mod state;

pub use intent::SceneIntent;
pub use reducer::SceneReducer;
pub use state::{Scene, SceneMode, SceneState};
