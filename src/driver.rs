use embassy_sync::blocking_mutex::raw::RawMutex;
use num_traits::ToPrimitive;

use crate::bcd::DigitTriple;
use crate::bus::DisplayOutput;
use crate::config::SchedulerConfig;
use crate::decoder::SegmentDecoder;
use crate::latch::DigitLatch;
use crate::scheduler::{DisplayScheduler, RefreshFrame};
use crate::SegmuxError;

/// Multiplexed 3-digit display: scheduler, decoder and bus wired to a latch.
///
/// Call [`MultiplexedDisplay::on_tick`] from the periodic time source and
/// [`MultiplexedDisplay::on_reset`] on reset. Values can be published through
/// [`MultiplexedDisplay::display_number`] or directly through the latch from
/// another context.
pub struct MultiplexedDisplay<'a, M, B, D>
where
    M: RawMutex,
{
    pub bus: B,
    pub decoder: D,
    latch: &'a DigitLatch<M>,
    scheduler: DisplayScheduler,
}

impl<'a, M, B, D, E> MultiplexedDisplay<'a, M, B, D>
where
    M: RawMutex,
    B: DisplayOutput<Error = E>,
    D: SegmentDecoder,
{
    pub fn new(latch: &'a DigitLatch<M>, bus: B, decoder: D, config: SchedulerConfig) -> Self {
        Self {
            bus,
            decoder,
            latch,
            scheduler: DisplayScheduler::new(config),
        }
    }

    pub fn destroy(self) -> B {
        self.bus
    }

    pub fn scheduler(&self) -> &DisplayScheduler {
        &self.scheduler
    }

    pub fn latch(&self) -> &'a DigitLatch<M> {
        self.latch
    }

    /// Frame for the current phase and latched digits.
    pub fn current_frame(&self) -> RefreshFrame {
        self.scheduler.current_frame(self.latch.load(), &self.decoder)
    }

    pub fn on_tick(&mut self) -> Result<(), SegmuxError<E>> {
        self.scheduler.on_tick();
        self.refresh()
    }

    pub fn on_reset(&mut self) -> Result<(), SegmuxError<E>> {
        self.scheduler.on_reset();
        self.refresh()
    }

    /// Rewrites the bus without advancing the scheduler.
    pub fn refresh(&mut self) -> Result<(), SegmuxError<E>> {
        let frame = self.current_frame();
        self.write(&frame)
    }

    pub fn blank(&mut self) -> Result<(), SegmuxError<E>> {
        let frame = RefreshFrame::blank(&self.decoder);
        self.write(&frame)
    }

    pub fn display_number<T>(&mut self, number: T) -> Result<DigitTriple, SegmuxError<E>>
    where
        T: ToPrimitive,
    {
        let value = number.to_u8().ok_or(SegmuxError::InvalidValue)?;
        Ok(self.latch.store_value(value))
    }

    fn write(&mut self, frame: &RefreshFrame) -> Result<(), SegmuxError<E>> {
        let result = self.bus.write_frame(frame);
        #[cfg(feature = "defmt")]
        let result = result.inspect_err(|_| {
            defmt::warn!("segmux: bus write failed for {}", frame.active_digit);
        });
        result?;
        Ok(())
    }
}
