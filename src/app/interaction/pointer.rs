//! Gesten-State-Machine: Klick, Doppelklick, Box-Drag, Hover.

use glam::Vec2;

use super::{InteractionState, Modifiers, PointerEvent, PointerGesture};
use crate::app::AppIntent;
use crate::core::{HitTester, Layer, ScreenRect};
use crate::shared::EditorOptions;

impl InteractionState {
    /// Verarbeitet ein einzelnes Pointer-Event und hängt resultierende
    /// Intents an `intents` an.
    pub(super) fn handle_pointer_event(
        &mut self,
        event: PointerEvent,
        hit_tester: &dyn HitTester,
        layers: Layer,
        options: &EditorOptions,
        intents: &mut Vec<AppIntent>,
    ) {
        match event {
            PointerEvent::Pressed {
                pointer,
                pos,
                time,
                modifiers,
            } => self.handle_pressed(pointer, pos, time, modifiers),
            PointerEvent::Moved {
                pointer,
                pos,
                primary_down,
            } => self.handle_moved(pointer, pos, primary_down, options),
            PointerEvent::Released { pointer, pos, time: _ } => {
                self.handle_released(pointer, pos, hit_tester, layers, options, intents)
            }
        }
    }

    fn handle_pressed(&mut self, pointer: u32, pos: Vec2, time: f64, modifiers: Modifiers) {
        // Ein erneuter Press desselben Pointers ersetzt die alte Geste
        self.gestures.insert(
            pointer,
            PointerGesture::ClickCandidate {
                press_pos: pos,
                press_time: time,
                modifiers,
            },
        );
    }

    fn handle_moved(
        &mut self,
        pointer: u32,
        pos: Vec2,
        primary_down: bool,
        options: &EditorOptions,
    ) {
        if !primary_down {
            // Hover: pro Frame zählt nur die letzte Position
            self.pending_hover = Some(pos);
            return;
        }

        // Drag eines nicht erfassten Pointers (z.B. außerhalb des
        // Viewports gestartet) wird ignoriert
        let Some(gesture) = self.gestures.get_mut(&pointer) else {
            return;
        };

        match *gesture {
            PointerGesture::ClickCandidate {
                press_pos,
                modifiers,
                ..
            } => {
                if press_pos.distance(pos) > options.drag_threshold_px {
                    *gesture = PointerGesture::BoxDragging {
                        start: press_pos,
                        current: pos,
                        modifiers,
                    };
                }
            }
            PointerGesture::BoxDragging { start, modifiers, .. } => {
                *gesture = PointerGesture::BoxDragging {
                    start,
                    current: pos,
                    modifiers,
                };
            }
        }
    }

    fn handle_released(
        &mut self,
        pointer: u32,
        pos: Vec2,
        hit_tester: &dyn HitTester,
        layers: Layer,
        options: &EditorOptions,
        intents: &mut Vec<AppIntent>,
    ) {
        let Some(gesture) = self.gestures.remove(&pointer) else {
            // Kaputte Event-Zustellung: Up ohne erfasstes Down
            log::warn!("Pointer-Up ohne erfasste Geste ignoriert (Pointer {})", pointer);
            return;
        };

        match gesture {
            PointerGesture::ClickCandidate {
                press_pos,
                press_time,
                modifiers,
            } => {
                // Doppelklick: Abstand und Press-zu-Press-Intervall
                let double = self.last_click.is_some_and(|(last_pos, last_time)| {
                    pos.distance(last_pos) <= options.double_click_radius_px
                        && press_time - last_time <= options.double_click_interval_s
                });
                // Nach einem Doppelklick beginnt die Erkennung von vorn
                self.last_click = if double { None } else { Some((pos, press_time)) };

                let hits = hit_tester.raycast(press_pos, layers);
                intents.push(AppIntent::ClickPickRequested {
                    hits,
                    additive: modifiers.command,
                    double,
                });
            }
            PointerGesture::BoxDragging {
                start, modifiers, ..
            } => {
                let rect = ScreenRect::from_corners(start, pos);
                let nodes = hit_tester.rect_test(rect, layers);
                intents.push(AppIntent::BoxSelectRequested {
                    nodes,
                    additive: modifiers.command,
                });
                self.last_click = None;
            }
        }
    }

    /// Löst den koaleszierten Hover des Frames auf.
    pub(super) fn flush_hover(
        &mut self,
        hit_tester: &dyn HitTester,
        layers: Layer,
        intents: &mut Vec<AppIntent>,
    ) {
        if let Some(pos) = self.pending_hover.take() {
            let hits = hit_tester.raycast(pos, layers);
            intents.push(AppIntent::HoverUpdateRequested { hits });
        }
    }
}
