//! Display and I/O around the decomposition: scenes, frames, interactive
//! input, results file. Nothing here feeds back into the algorithm.

pub mod frames;
pub mod input;
pub mod results;
pub mod scene;

pub use frames::all_frames;
pub use input::{handle, Drawing, InputEvent, InputState, View, TOLERANCE};
pub use results::{format_coord, format_point, write_results};
pub use scene::{scenes_from_json, scenes_to_json, LinesCollection, PointsCollection, Scene, Style};
