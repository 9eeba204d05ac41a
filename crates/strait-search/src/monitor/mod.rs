// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Search Monitors
//!
//! Observers plugged into the worker loop. Monitors receive lifecycle
//! events (`on_enter_search`, `on_solution_found`, `on_step`, ...) and can
//! request cooperative termination through `search_command`. Concerns
//! compose through [`CompositeMonitor`]; each worker thread carries its
//! own stack, so monitors need no internal synchronization.
//!
//! [`CompositeMonitor`]: crate::monitor::composite::CompositeMonitor

pub mod composite;
pub mod interrupt;
pub mod log;
pub mod no_op;
pub mod search_monitor;
pub mod time_limit;

pub use composite::CompositeMonitor;
pub use interrupt::InterruptMonitor;
pub use log::LogSearchMonitor;
pub use no_op::NoOperationMonitor;
pub use search_monitor::{SearchCommand, SearchMonitor};
pub use time_limit::TimeLimitMonitor;
