use crate::model::TouchId;

/// Commands the tracker issues to whatever draws the touch tokens.
/// The tracker never reads anything back.
pub trait Renderer {
    type Token;

    fn create_token(&mut self, id: TouchId, x: f64, y: f64) -> Self::Token;
    fn move_token(&mut self, token: &Self::Token, x: f64, y: f64);
    fn set_loading(&mut self, token: &Self::Token, loading: bool);
    /// Restarts the idle pulse so all tokens animate in step.
    fn restart_animation(&mut self, token: &Self::Token);
    fn mark_selected(&mut self, token: &Self::Token);
    fn destroy_token(&mut self, token: Self::Token);
}

#[cfg(test)]
pub use recording::{RecordingRenderer, RenderCommand};
