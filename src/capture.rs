//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
// -----------------------------------------------------------------------------
// Ported to rust from https://github.com/rxi/microui/ and the original license
//
// Copyright (c) 2020 rxi
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.
//
//! Exclusive pointer capture shared by the scrollbars of one or more views.

use std::{cell::Cell, rc::Rc};

use crate::Id;

/// Shared handle to the single pointer-capture slot of a window.
///
/// Cloning the handle shares the slot. At most one [`CaptureGrant`] is live
/// per slot; dropping the grant releases capture.
#[derive(Clone, Default)]
pub struct MouseCapture(Rc<Cell<Option<Id>>>);

impl MouseCapture {
    /// Creates an empty capture slot.
    pub fn new() -> Self { Self::default() }

    /// Returns the current owner, if any.
    pub fn owner(&self) -> Option<Id> { self.0.get() }

    /// Returns `true` if someone currently holds capture.
    pub fn is_captured(&self) -> bool { self.0.get().is_some() }

    /// Tries to take capture for `id`. Fails while another owner holds it.
    pub fn acquire(&self, id: Id) -> Option<CaptureGrant> {
        match self.0.get() {
            Some(owner) if owner != id => None,
            _ => {
                self.0.set(Some(id));
                Some(CaptureGrant { slot: self.0.clone(), id })
            }
        }
    }

    /// Revokes capture from whoever holds it (focus switch, window deactivation).
    ///
    /// The holder notices on its next pointer event through [`CaptureGrant::is_held`].
    pub fn release(&self) {
        if let Some(owner) = self.0.take() {
            log::trace!("capture revoked from {:?}", owner);
        }
    }
}

/// Proof of pointer capture, held by an active drag session.
pub struct CaptureGrant {
    slot: Rc<Cell<Option<Id>>>,
    id: Id,
}

impl CaptureGrant {
    /// Returns the id the grant was issued to.
    pub fn id(&self) -> Id { self.id }

    /// Returns `false` once capture was revoked through [`MouseCapture::release`].
    pub fn is_held(&self) -> bool { self.slot.get() == Some(self.id) }
}

impl Drop for CaptureGrant {
    fn drop(&mut self) {
        if self.is_held() {
            self.slot.set(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_is_exclusive() {
        let capture = MouseCapture::new();
        let a = Id::from_str("a");
        let b = Id::from_str("b");
        let grant = capture.acquire(a).unwrap();
        assert!(capture.acquire(b).is_none());
        assert_eq!(capture.owner(), Some(a));
        drop(grant);
        assert!(!capture.is_captured());
        assert!(capture.acquire(b).is_some());
    }

    #[test]
    fn revoked_grant_does_not_clear_new_owner() {
        let capture = MouseCapture::new();
        let a = Id::from_str("a");
        let b = Id::from_str("b");
        let stale = capture.acquire(a).unwrap();
        capture.release();
        assert!(!stale.is_held());
        let fresh = capture.acquire(b).unwrap();
        drop(stale);
        assert!(fresh.is_held());
        assert_eq!(capture.owner(), Some(b));
    }
}
