//! Timer-driven carousel controller

use super::{Carousel, CarouselState};
use crate::core::{Error, Result, ServiceSlide};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

/// A mounted carousel plus its auto-advance timer
///
/// At most one timer task exists per controller. It is aborted on manual
/// hold, on unmount and when the controller is dropped.
pub struct CarouselController {
    carousel: Arc<Mutex<Carousel>>,
    period: Duration,
    timer: Option<JoinHandle<()>>,
}

impl CarouselController {
    /// Fails on an empty slide list or a zero period
    pub fn new(items: Vec<ServiceSlide>, period: Duration) -> Result<Self> {
        if period.is_zero() {
            return Err(Error::Config(
                "carousel interval must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            carousel: Arc::new(Mutex::new(Carousel::new(items)?)),
            period,
            timer: None,
        })
    }

    /// Mount at slide 0 and start the timer when autoplay is on.
    /// Must be called from within a tokio runtime.
    pub async fn mount(&mut self, autoplay: bool) {
        self.stop_timer();
        let len = {
            let mut carousel = self.carousel.lock().await;
            carousel.mount(autoplay);
            carousel.len()
        };
        log::info!("Carousel mounted with {} slides (autoplay: {})", len, autoplay);

        if autoplay {
            self.start_timer();
        }
    }

    pub async fn unmount(&mut self) {
        self.stop_timer();
        self.carousel.lock().await.unmount();
        log::info!("Carousel unmounted");
    }

    /// Advance one slide. While auto-advancing, the period restarts from now.
    pub async fn next(&mut self) -> usize {
        let (index, restart) = {
            let mut carousel = self.carousel.lock().await;
            (carousel.next(), carousel.autoplay_enabled())
        };
        if restart {
            self.start_timer();
        }
        index
    }

    /// Go back one slide. While auto-advancing, the period restarts from now.
    pub async fn previous(&mut self) -> usize {
        let (index, restart) = {
            let mut carousel = self.carousel.lock().await;
            (carousel.previous(), carousel.autoplay_enabled())
        };
        if restart {
            self.start_timer();
        }
        index
    }

    /// Right arrow: next slide, autoplay off
    pub async fn press_next(&mut self) -> usize {
        self.stop_timer();
        let index = self.carousel.lock().await.press_next();
        log::info!("Carousel held at slide {}", index);
        index
    }

    /// Left arrow: previous slide, autoplay off
    pub async fn press_previous(&mut self) -> usize {
        self.stop_timer();
        let index = self.carousel.lock().await.press_previous();
        log::info!("Carousel held at slide {}", index);
        index
    }

    /// Dot indicator: jump to `index`, autoplay off.
    /// An out-of-range index is rejected and the timer keeps running.
    pub async fn go_to(&mut self, index: usize) -> Result<()> {
        self.carousel.lock().await.go_to(index)?;
        self.stop_timer();
        log::info!("Carousel held at slide {}", index);
        Ok(())
    }

    pub async fn current_index(&self) -> usize {
        self.carousel.lock().await.current_index()
    }

    pub async fn state(&self) -> CarouselState {
        self.carousel.lock().await.state()
    }

    /// Copy of the current carousel state for rendering
    pub async fn snapshot(&self) -> Carousel {
        self.carousel.lock().await.clone()
    }

    pub fn has_timer(&self) -> bool {
        self.timer.as_ref().map_or(false, |timer| !timer.is_finished())
    }

    fn start_timer(&mut self) {
        self.stop_timer();

        let carousel = Arc::clone(&self.carousel);
        let period = self.period;
        self.timer = Some(tokio::spawn(async move {
            // First advance one full period after start
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                let mut carousel = carousel.lock().await;
                if !carousel.tick() {
                    break;
                }
                log::debug!("Carousel advanced to slide {}", carousel.current_index());
            }
        }));
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl Drop for CarouselController {
    fn drop(&mut self) {
        self.stop_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::DEFAULT_INTERVAL_MS;

    fn controller() -> CarouselController {
        CarouselController::new(
            ServiceSlide::catalog(),
            Duration::from_millis(DEFAULT_INTERVAL_MS),
        )
        .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_five_ticks() {
        let mut controller = controller();
        controller.mount(true).await;

        tokio::time::sleep(Duration::from_millis(25_500)).await;
        assert_eq!(controller.current_index().await, 5);
        assert_eq!(controller.state().await, CarouselState::AutoAdvancing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_advance_before_first_period() {
        let mut controller = controller();
        controller.mount(true).await;

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert_eq!(controller.current_index().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_go_to_stops_timer() {
        let mut controller = controller();
        controller.mount(true).await;
        controller.go_to(3).await.unwrap();

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(controller.current_index().await, 3);
        assert_eq!(controller.state().await, CarouselState::ManualHold);
        assert!(!controller.has_timer());
    }

    #[tokio::test(start_paused = true)]
    async fn test_go_to_out_of_range_keeps_autoplay() {
        let mut controller = controller();
        controller.mount(true).await;

        let err = controller.go_to(42).await.unwrap_err();
        assert!(matches!(err, Error::SlideOutOfRange { index: 42, len: 9 }));

        tokio::time::sleep(Duration::from_millis(5_500)).await;
        assert_eq!(controller.current_index().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_arrow_stops_timer() {
        let mut controller = controller();
        controller.mount(true).await;
        assert_eq!(controller.press_previous().await, 8);

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(controller.current_index().await, 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_restarts_period() {
        let mut controller = controller();
        controller.mount(true).await;

        tokio::time::sleep(Duration::from_millis(4_000)).await;
        assert_eq!(controller.next().await, 1);

        // Old timer would have fired at 5s; the restarted one fires at 9s
        tokio::time::sleep(Duration::from_millis(4_000)).await;
        assert_eq!(controller.current_index().await, 1);
        tokio::time::sleep(Duration::from_millis(1_500)).await;
        assert_eq!(controller.current_index().await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_stops_timer() {
        let mut controller = controller();
        controller.mount(true).await;
        tokio::time::sleep(Duration::from_millis(5_500)).await;
        controller.unmount().await;

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(controller.current_index().await, 1);
        assert_eq!(controller.state().await, CarouselState::Idle);
        assert!(!controller.has_timer());
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_single_timer() {
        let mut controller = controller();
        controller.mount(true).await;
        controller.mount(true).await;

        tokio::time::sleep(Duration::from_millis(10_500)).await;
        assert_eq!(controller.current_index().await, 2);
    }

    #[test]
    fn test_zero_period_rejected() {
        let result = CarouselController::new(ServiceSlide::catalog(), Duration::ZERO);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_without_autoplay_stops_timer() {
        let mut controller = controller();
        controller.mount(true).await;
        assert!(controller.has_timer());

        controller.mount(false).await;
        assert!(!controller.has_timer());
        assert_eq!(controller.state().await, CarouselState::ManualHold);

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(controller.current_index().await, 0);
    }
}
