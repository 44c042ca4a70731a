//! Deterministic platform doubles

use std::collections::VecDeque;

use super::{DigitalIo, FrameClock};

/// Replays a fixed sequence of input register samples and records every
/// value written to the output register.
#[derive(Debug, Clone, Default)]
pub struct ScriptedIo {
    inputs: VecDeque<u32>,
    /// Sample returned once the script runs out
    pub idle_input: u32,
    pub outputs: Vec<u32>,
    pub direction: Option<u32>,
}

impl ScriptedIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inputs(inputs: impl IntoIterator<Item = u32>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Last value written to the output register
    pub fn last_output(&self) -> Option<u32> {
        self.outputs.last().copied()
    }
}

impl DigitalIo for ScriptedIo {
    fn read_input(&mut self) -> u32 {
        self.inputs.pop_front().unwrap_or(self.idle_input)
    }

    fn write_output(&mut self, value: u32) {
        self.outputs.push(value);
    }

    fn set_direction(&mut self, mask: u32) {
        self.direction = Some(mask);
    }
}

/// Advances instantly, counting the ticks it was asked to wait
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    pub elapsed_ticks: u64,
    pub waits: Vec<u32>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for VirtualClock {
    fn wait(&mut self, ticks: u32) {
        self.elapsed_ticks += u64::from(ticks);
        self.waits.push(ticks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_inputs_then_idle() {
        let mut io = ScriptedIo::with_inputs([0x100, 0x200]);
        io.idle_input = 0x300;
        assert_eq!(io.read_input(), 0x100);
        assert_eq!(io.read_input(), 0x200);
        assert_eq!(io.read_input(), 0x300);
        assert_eq!(io.remaining_inputs(), 0);
    }

    #[test]
    fn test_virtual_clock_accumulates() {
        let mut clock = VirtualClock::new();
        clock.wait(100);
        clock.wait(5000);
        assert_eq!(clock.elapsed_ticks, 5100);
        assert_eq!(clock.waits, vec![100, 5000]);
    }
}
