// This file is part of the symcheck package.
//
// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
// spell-checker:ignore (words) GeeksQuiz
//! The library side of the linkage probe: one exported entry point whose
//! observable behavior is a pair of markers bracketing a single spawned
//! worker.

use std::panic;
use std::thread;
use std::time::Duration;

/// Entry point consumed by the `libprobe` checker.
///
/// Prints the "before" marker, spawns exactly one worker that sleeps a
/// fixed duration and prints its completion marker, blocks until the
/// worker finishes, prints the "after" marker, and returns status 0.
/// The join barrier, not timing, guarantees the marker order.
///
/// A worker panic is rethrown and takes the process down; there is no
/// retry, timeout, or cancellation.
pub fn run() -> i32 {
    println!("Before thread");

    let worker = thread::spawn(|| {
        thread::sleep(Duration::from_secs(1));
        println!("Printing GeeksQuiz from Thread ");
    });
    if let Err(fault) = worker.join() {
        panic::resume_unwind(fault);
    }

    println!("After thread");
    0
}
