//! Per-call phase timing for the decode path.
//!
//! The decode call is bracketed into three phase categories: *wrapper*
//! (header and trailer handling), *core* (the delegate DEFLATE decode), and
//! *checksum* (CRC-32 over the produced output). The accumulator lives on
//! the decompressor instance, is reset at the start of each call, and is
//! finalized exactly once per call from a single cleanup point, so every
//! exit path — success or failure at any stage — leaves it consistent.
//!
//! Gated by the `timing` cargo feature. With the feature off, [`Timings`]
//! is a zero-sized struct whose methods are empty `#[inline(always)]`
//! bodies, so call sites stay unconditional and compile to nothing — no
//! runtime branch, no timestamp read.
//!
//! Timestamps come from `std::time::Instant`, which is monotonic and
//! MT-safe on all supported platforms.

#[cfg(feature = "timing")]
mod imp {
    use std::time::Instant;

    /// Opaque section-start timestamp. The absolute value is meaningless;
    /// it exists only to close the section it opened.
    #[derive(Clone, Copy)]
    pub struct SectionStart(Instant);

    /// Per-call phase totals, in nanoseconds.
    ///
    /// Owned by the decompressor; never shared across concurrent calls.
    /// Read it only after the decode call returns — [`Timings::finished`]
    /// reports whether finalization has run.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Timings {
        wrapper_ns: u64,
        core_ns: u64,
        checksum_ns: u64,
        total_ns: u64,
        /// Latency from the instant the core phase begins to call finish.
        core_to_finish_ns: u64,
        call_start: Option<Instant>,
        core_start: Option<Instant>,
        core_section: Option<Instant>,
        checksum_ran: bool,
        checksum_done: bool,
        finished: bool,
    }

    impl Timings {
        /// Reset all totals and mark the start of a decode call.
        pub(crate) fn begin(&mut self) {
            *self = Timings {
                call_start: Some(Instant::now()),
                ..Timings::default()
            };
        }

        /// Open a wrapper or checksum section.
        pub(crate) fn section_begin(&self) -> SectionStart {
            SectionStart(Instant::now())
        }

        /// Close a wrapper section. When `marks_core_start` is set, this
        /// boundary also records the instant the core phase begins, used
        /// for the overall input-to-output latency.
        pub(crate) fn wrapper_end(&mut self, start: SectionStart, marks_core_start: bool) {
            let now = Instant::now();
            self.wrapper_ns += (now - start.0).as_nanos() as u64;
            if marks_core_start {
                self.core_start = Some(now);
            }
        }

        /// Open the core (delegate decode) section.
        pub(crate) fn core_begin(&mut self) {
            self.core_section = Some(Instant::now());
        }

        /// Close the core section.
        pub(crate) fn core_end(&mut self) {
            if let Some(start) = self.core_section.take() {
                self.core_ns += start.elapsed().as_nanos() as u64;
            }
        }

        /// Open the checksum section.
        pub(crate) fn checksum_begin(&self) -> SectionStart {
            SectionStart(Instant::now())
        }

        /// Close the checksum section and record that the phase ran.
        pub(crate) fn checksum_end(&mut self, start: SectionStart) {
            self.checksum_ns += start.0.elapsed().as_nanos() as u64;
            self.checksum_ran = true;
        }

        /// Mark the checksum stage as concluded, whether or not it ran.
        /// An early failure short-circuits past the checksum entirely;
        /// this still fires from the shared cleanup point.
        pub(crate) fn set_checksum_done(&mut self) {
            self.checksum_done = true;
        }

        /// Finalize the call. Reached from exactly one cleanup point.
        pub(crate) fn finish(&mut self) {
            let now = Instant::now();
            if let Some(start) = self.call_start {
                self.total_ns = (now - start).as_nanos() as u64;
            }
            if let Some(start) = self.core_start {
                self.core_to_finish_ns = (now - start).as_nanos() as u64;
            }
            self.finished = true;
        }

        /// Nanoseconds spent in header and trailer handling.
        pub fn wrapper_ns(&self) -> u64 {
            self.wrapper_ns
        }

        /// Nanoseconds spent inside the delegate decode.
        pub fn core_ns(&self) -> u64 {
            self.core_ns
        }

        /// Nanoseconds spent computing the CRC-32 of the output.
        pub fn checksum_ns(&self) -> u64 {
            self.checksum_ns
        }

        /// Wall time of the whole call.
        pub fn total_ns(&self) -> u64 {
            self.total_ns
        }

        /// Latency from the start of the core phase to the end of the call.
        /// Zero when the call failed before the core phase began.
        pub fn core_to_finish_ns(&self) -> u64 {
            self.core_to_finish_ns
        }

        /// Whether the checksum phase actually ran (an earlier failure may
        /// have skipped it).
        pub fn checksum_ran(&self) -> bool {
            self.checksum_ran
        }

        /// Whether the checksum stage was concluded for this call.
        pub fn checksum_done(&self) -> bool {
            self.checksum_done
        }

        /// Whether the call has been finalized and the totals are readable.
        pub fn finished(&self) -> bool {
            self.finished
        }
    }
}

#[cfg(not(feature = "timing"))]
mod imp {
    /// Zero-sized stand-in for a section timestamp.
    #[derive(Clone, Copy)]
    pub struct SectionStart;

    /// Zero-sized stand-in: every method is an empty inline no-op.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Timings;

    impl Timings {
        #[inline(always)]
        pub(crate) fn begin(&mut self) {}
        #[inline(always)]
        pub(crate) fn section_begin(&self) -> SectionStart {
            SectionStart
        }
        #[inline(always)]
        pub(crate) fn wrapper_end(&mut self, _start: SectionStart, _marks_core_start: bool) {}
        #[inline(always)]
        pub(crate) fn core_begin(&mut self) {}
        #[inline(always)]
        pub(crate) fn core_end(&mut self) {}
        #[inline(always)]
        pub(crate) fn checksum_begin(&self) -> SectionStart {
            SectionStart
        }
        #[inline(always)]
        pub(crate) fn checksum_end(&mut self, _start: SectionStart) {}
        #[inline(always)]
        pub(crate) fn set_checksum_done(&mut self) {}
        #[inline(always)]
        pub(crate) fn finish(&mut self) {}
    }
}

pub use imp::{SectionStart, Timings};
