//! Bounded command queue for `no_std` environments.
//!
//! Commands are produced from interrupt or USB context and drained by the
//! tick loop. Access goes through `critical-section`, the storage is a
//! fixed-size `heapless::Deque`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command::FadeCommand;

/// Queue of pending fade commands
///
/// SIZE is the number of commands that can wait at once
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<FadeCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    /// Create an empty queue, usable in a `static`
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a producer handle for this queue.
    pub const fn producer(&self) -> CommandProducer<'_, SIZE> {
        CommandProducer { queue: self }
    }

    /// Enqueue a command
    ///
    /// Returns the command if the queue is full
    pub fn submit(&self, command: FadeCommand) -> Result<(), FadeCommand> {
        let result = critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut().push_back(command)
        });

        #[cfg(feature = "esp32-log")]
        if result.is_err() {
            println!("[CommandQueue.submit] queue full, dropping {:?}", command);
        }

        result
    }

    /// Take the oldest command
    pub fn take(&self) -> Option<FadeCommand> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of waiting commands
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight handle that can only submit commands
#[derive(Clone, Copy)]
pub struct CommandProducer<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandProducer<'_, SIZE> {
    /// Enqueue a command
    ///
    /// Returns the command if the queue is full
    pub fn submit(&self, command: FadeCommand) -> Result<(), FadeCommand> {
        self.queue.submit(command)
    }
}
