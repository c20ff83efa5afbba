//! Transform stack operations.
//!
//! The canvas keeps a stack of saved transforms next to Cairo's current
//! matrix: `push` snapshots the active matrix, `pop` restores the snapshot.
//! Unlike Cairo's own save/restore, only the matrix is captured, matching
//! the push/pop semantics of the original transform stack.

use cairo::Matrix;

use super::Graphics;
use crate::error::GraphicsError;

impl Graphics {
    /// Saves the current transform onto the stack.
    pub fn push(&mut self) {
        self.transforms.push(self.ctx.matrix());
    }

    /// Restores the most recently pushed transform and removes it from the
    /// stack.
    ///
    /// # Errors
    /// Returns [`GraphicsError::EmptyStack`] when nothing has been pushed.
    pub fn pop(&mut self) -> Result<(), GraphicsError> {
        let top = self.transforms.pop().ok_or(GraphicsError::EmptyStack)?;
        self.ctx.set_matrix(top);

        Ok(())
    }

    /// Resets the current transform to identity. The stack is untouched.
    pub fn origin(&mut self) {
        self.ctx.set_matrix(Matrix::identity());
    }

    /// Composes a rotation of `angle` radians onto the current transform.
    pub fn rotate(&mut self, angle: f64) {
        self.ctx.rotate(angle);
    }

    /// Composes a scale onto the current transform.
    pub fn scale(&mut self, x: f64, y: f64) {
        self.ctx.scale(x, y);
    }

    /// Composes a translation onto the current transform.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.ctx.translate(dx, dy);
    }

    /// The active transform matrix.
    pub fn transform(&self) -> Matrix {
        self.ctx.matrix()
    }
}
