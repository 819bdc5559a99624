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
use crate::{Recti, ScrollAxis};

/// The widget a [`ScrollView`](crate::ScrollView) lives in.
///
/// Window-based hosts move native child windows, item-based hosts move items
/// of their own tree; the view only reports where things go. Every method
/// defaults to doing nothing.
pub trait ScrollHost {
    /// A scrollbar was placed at `track`, or hidden when `None`.
    fn place_scrollbar(&mut self, _axis: ScrollAxis, _track: Option<Recti>) {}
    /// The content occupies `rect` now (negative origin offsets when the view scrolls it).
    fn place_content(&mut self, _rect: Recti) {}
    /// `rect` needs repainting.
    fn invalidate(&mut self, _rect: Recti) {}
}

impl ScrollHost for () {}

#[derive(Copy, Clone, Debug)]
/// A single notification recorded by [`HostRecorder`].
pub enum HostEvent {
    /// See [`ScrollHost::place_scrollbar`].
    Scrollbar(ScrollAxis, Option<Recti>),
    /// See [`ScrollHost::place_content`].
    Content(Recti),
    /// See [`ScrollHost::invalidate`].
    Invalidate(Recti),
}

/// Host that queues notifications for a toolkit that applies them after the
/// event handler returns.
#[derive(Default)]
pub struct HostRecorder {
    events: Vec<HostEvent>,
}

impl HostRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self { Self::default() }

    /// Notifications recorded since the last drain.
    pub fn events(&self) -> &[HostEvent] { &self.events }

    /// Removes and returns the recorded notifications.
    pub fn drain(&mut self) -> Vec<HostEvent> { std::mem::take(&mut self.events) }

    /// Last placement reported for the scrollbar of `axis`, if any was recorded.
    pub fn last_scrollbar(&self, axis: ScrollAxis) -> Option<Option<Recti>> {
        self.events.iter().rev().find_map(|event| match *event {
            HostEvent::Scrollbar(a, track) if a == axis => Some(track),
            _ => None,
        })
    }

    /// Last content rectangle recorded, if any.
    pub fn last_content(&self) -> Option<Recti> {
        self.events.iter().rev().find_map(|event| match *event {
            HostEvent::Content(rect) => Some(rect),
            _ => None,
        })
    }
}

impl ScrollHost for HostRecorder {
    fn place_scrollbar(&mut self, axis: ScrollAxis, track: Option<Recti>) { self.events.push(HostEvent::Scrollbar(axis, track)); }
    fn place_content(&mut self, rect: Recti) { self.events.push(HostEvent::Content(rect)); }
    fn invalidate(&mut self, rect: Recti) { self.events.push(HostEvent::Invalidate(rect)); }
}
