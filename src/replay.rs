//! Headless replay of recorded orientation traces.
//!
//! A trace is JSON lines, one step per line, tagged by `"event"`:
//!
//! ```text
//! {"event":"connect"}
//! {"event":"screen","angle":90}
//! {"event":"device","alpha":90,"beta":0,"gamma":45}
//! {"event":"update"}
//! {"event":"disconnect"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use glam::Quat;
use serde::{Deserialize, Serialize};

use crate::controls::{DeviceOrientationReading, OrientationControls};
use crate::error::DevorientError;
use crate::options::ControlsOptions;
use crate::platform::{ManualPlatform, PlatformEvent};
use crate::target::Object3D;

/// One line of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceStep {
    /// Call `connect`.
    Connect,
    /// Call `disconnect`.
    Disconnect,
    /// Call `update` and record a frame.
    Update,
    /// Deliver a device-orientation event.
    Device(DeviceOrientationReading),
    /// Rotate the screen and deliver a screen-orientation event.
    Screen {
        /// New screen angle in degrees.
        #[serde(default)]
        angle: Option<f64>,
    },
}

/// Target orientation recorded after an `update` step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    /// 0-based index among recorded frames.
    pub index: usize,
    /// Whether the controls were connected when `update` ran.
    pub connected: bool,
    /// Orientation as `[x, y, z, w]`.
    pub quaternion: [f32; 4],
}

/// Parse a JSON-lines trace.
///
/// # Errors
///
/// [`DevorientError::Trace`] for the first line that is not a valid step.
pub fn parse_trace(text: &str) -> Result<Vec<TraceStep>, DevorientError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| {
            serde_json::from_str(line).map_err(|e| DevorientError::Trace {
                line: i + 1,
                message: e.to_string(),
            })
        })
        .collect()
}

/// Parse `text` and replay it with `options`.
///
/// Frames recorded while the controls were disconnected are dropped
/// unless `include_disconnected` is set.
///
/// # Errors
///
/// [`DevorientError::Trace`] if the trace does not parse.
pub fn replay_trace(
    text: &str,
    options: ControlsOptions,
    include_disconnected: bool,
) -> Result<Vec<Frame>, DevorientError> {
    let steps = parse_trace(text)?;
    let frames = Replay::new(options).run(&steps);
    log::info!("{} steps, {} frames", steps.len(), frames.len());
    Ok(frames
        .into_iter()
        .filter(|f| include_disconnected || f.connected)
        .collect())
}

/// Drives orientation controls over a [`ManualPlatform`].
pub struct Replay {
    platform: ManualPlatform,
    controls: OrientationControls<Object3D, ManualPlatform>,
    frames: usize,
}

impl Replay {
    /// Fresh, disconnected controls around a default [`Object3D`].
    #[must_use]
    pub fn new(options: ControlsOptions) -> Self {
        let platform = ManualPlatform::new();
        let controls = OrientationControls::with_options(
            Object3D::default(),
            platform.clone(),
            options,
        );
        Self {
            platform,
            controls,
            frames: 0,
        }
    }

    /// Apply one step. Returns a frame for `update` steps.
    pub fn step(&mut self, step: TraceStep) -> Option<Frame> {
        match step {
            TraceStep::Connect => self.controls.connect(),
            TraceStep::Disconnect => self.controls.disconnect(),
            TraceStep::Device(reading) => {
                let _ = self
                    .platform
                    .fire(&PlatformEvent::DeviceOrientation(reading));
            }
            TraceStep::Screen { angle } => {
                let _ = self.platform.rotate_screen(angle);
            }
            TraceStep::Update => {
                self.controls.update();
                let frame = Frame {
                    index: self.frames,
                    connected: self.controls.is_connected(),
                    quaternion: self.orientation().to_array(),
                };
                self.frames += 1;
                return Some(frame);
            }
        }
        None
    }

    /// Apply every step, collecting the recorded frames.
    pub fn run(&mut self, steps: &[TraceStep]) -> Vec<Frame> {
        steps.iter().filter_map(|step| self.step(*step)).collect()
    }

    /// Current target orientation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.controls.target().quaternion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACE: &str = r#"
# portrait, then landscape
{"event":"update"}
{"event":"connect"}
{"event":"device","alpha":90,"beta":0,"gamma":45}
{"event":"update"}
{"event":"screen","angle":90}
{"event":"update"}
"#;

    #[test]
    fn parses_all_step_kinds() {
        let steps = parse_trace(TRACE).unwrap();
        assert_eq!(steps.len(), 6);
        assert_eq!(steps[0], TraceStep::Update);
        assert_eq!(
            steps[2],
            TraceStep::Device(DeviceOrientationReading::new(90.0, 0.0, 45.0))
        );
        assert_eq!(steps[4], TraceStep::Screen { angle: Some(90.0) });
    }

    #[test]
    fn missing_fields_parse_as_absent() {
        let steps =
            parse_trace("{\"event\":\"device\",\"gamma\":10}\n{\"event\":\"screen\"}")
                .unwrap();
        assert_eq!(
            steps,
            vec![
                TraceStep::Device(DeviceOrientationReading {
                    alpha: None,
                    beta: None,
                    gamma: Some(10.0),
                }),
                TraceStep::Screen { angle: None },
            ]
        );
    }

    #[test]
    fn bad_line_reports_line_number() {
        let err = parse_trace("{\"event\":\"connect\"}\n\n{\"event\":\"spin\"}")
            .unwrap_err();
        assert!(matches!(err, DevorientError::Trace { line: 3, .. }));
    }

    #[test]
    fn replay_records_frames() {
        let steps = parse_trace(TRACE).unwrap();
        let frames = Replay::new(ControlsOptions::default()).run(&steps);
        assert_eq!(frames.len(), 3);

        assert!(!frames[0].connected);
        assert_eq!(frames[0].quaternion, Quat::IDENTITY.to_array());

        let golden =
            Quat::from_xyzw(-0.653_281_5, 0.653_281_5, 0.270_598_05, 0.270_598_05);
        assert!(frames[1].connected);
        assert!(Quat::from_array(frames[1].quaternion).abs_diff_eq(golden, 1e-5));

        let landscape = golden * Quat::from_rotation_z(-std::f32::consts::FRAC_PI_2);
        assert!(Quat::from_array(frames[2].quaternion).abs_diff_eq(landscape, 1e-5));
        assert_eq!(frames[2].index, 2);
    }

    const DISCONNECTING_TRACE: &str = r#"
{"event":"connect"}
{"event":"device","alpha":45,"beta":30,"gamma":0}
{"event":"update"}
{"event":"disconnect"}
{"event":"update"}
"#;

    #[test]
    fn disconnected_frames_are_dropped_unless_requested() {
        let opts = ControlsOptions::default();
        let connected = replay_trace(DISCONNECTING_TRACE, opts, false).unwrap();
        assert_eq!(connected.len(), 1);
        assert!(connected[0].connected);

        let all = replay_trace(DISCONNECTING_TRACE, opts, true).unwrap();
        assert_eq!(all.len(), 2);
        assert!(!all[1].connected);
        assert_eq!(all[1].index, 1);
    }

    #[test]
    fn options_change_replayed_orientation() {
        let gated = replay_trace(DISCONNECTING_TRACE, ControlsOptions::default(), false)
            .unwrap();
        let flat = Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2);
        assert!(Quat::from_array(gated[0].quaternion).abs_diff_eq(flat, 1e-5));

        let per_angle =
            ControlsOptions::from_toml("gating = \"per_angle\"\n").unwrap();
        let tilted = replay_trace(DISCONNECTING_TRACE, per_angle, false).unwrap();
        assert!(!Quat::from_array(tilted[0].quaternion).abs_diff_eq(flat, 1e-5));
    }

    #[test]
    fn replay_trace_surfaces_parse_errors() {
        let err = replay_trace("{\"event\":\"warp\"}", ControlsOptions::default(), false)
            .unwrap_err();
        assert!(matches!(err, DevorientError::Trace { line: 1, .. }));
    }
}
