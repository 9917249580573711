//! Core matrix operations

use log::{debug, trace};

use crate::frame::Frame;
use crate::interface::RegisterInterface;
use crate::mapper::remap;
use crate::register::{
    AUTO_PLAY_CONTROL_1, AUTO_PLAY_CONTROL_2, COLUMN_ENABLE, COMMAND, CONFIG, DISPLAY_OPTION,
    LED_CONTROL, LED_CONTROL_LEN, MODE_PICTURE, NORMAL_OPERATION, PAGE_FRAME, PAGE_FUNCTION,
    PICTURE_DISPLAY, PWM, SHUTDOWN, SOFTWARE_SHUTDOWN,
};

type MatrixResult<I> = core::result::Result<(), <I as RegisterInterface>::Error>;

/// Core driver for the Scroll Pack's LED matrix
///
/// Wraps a [`RegisterInterface`] and sequences the controller's registers:
/// one-time initialization, full-frame pushes, and the shutdown toggle.
/// Picture frame 0 is the only frame ever addressed; after every function
/// page excursion the driver reselects the frame page so draws can follow
/// without further page bookkeeping.
pub struct Matrix<I>
where
    I: RegisterInterface,
{
    /// Register transport
    interface: I,
}

impl<I> Matrix<I>
where
    I: RegisterInterface,
{
    /// Create a new Matrix instance
    ///
    /// The controller is untouched until [`init`](Self::init) is called.
    pub fn new(interface: I) -> Self {
        Self { interface }
    }

    /// Initialize the controller
    ///
    /// Order-sensitive: selects the function page, puts the controller in
    /// picture mode on frame 0, zeroes the auto-play and display-option
    /// registers, leaves software shutdown, then switches to the frame page
    /// and enables the wired LED addresses (17 columns of 7, none on the
    /// 18th control byte).
    ///
    /// # Errors
    ///
    /// Returns the transport error of the first write that fails; later
    /// writes are not attempted.
    pub fn init(&mut self) -> MatrixResult<I> {
        debug!("initializing controller");

        self.interface.write_register(COMMAND, PAGE_FUNCTION)?;

        self.interface.write_register(CONFIG, MODE_PICTURE)?;
        self.interface.write_register(PICTURE_DISPLAY, 0x00)?;
        self.interface.write_register(AUTO_PLAY_CONTROL_1, 0x00)?;
        self.interface.write_register(AUTO_PLAY_CONTROL_2, 0x00)?;
        self.interface.write_register(DISPLAY_OPTION, 0x00)?;
        self.interface.write_register(SHUTDOWN, NORMAL_OPERATION)?;

        self.interface.write_register(COMMAND, PAGE_FRAME)?;

        let mut enable = [COLUMN_ENABLE; LED_CONTROL_LEN];
        enable[LED_CONTROL_LEN - 1] = 0x00;
        self.interface.write_register_block(LED_CONTROL, &enable)?;

        self.interface.write_register(COMMAND, PAGE_FRAME)?;

        Ok(())
    }

    /// Push one frame to the controller
    ///
    /// Remaps the logical buffer into the electrical ordering and writes
    /// the whole PWM block in a single bus transaction. No partial writes,
    /// no double buffering; the previous picture stays visible until the
    /// transaction lands.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the block write fails.
    pub fn draw(&mut self, frame: &Frame) -> MatrixResult<I> {
        trace!("pushing frame");
        self.interface.write_register_block(PWM, &remap(frame.data()))
    }

    /// Enter software shutdown
    ///
    /// The controller blanks all outputs but keeps its registers; restore
    /// with [`wake`](Self::wake).
    pub fn shutdown(&mut self) -> MatrixResult<I> {
        debug!("entering software shutdown");
        self.write_function_register(SHUTDOWN, SOFTWARE_SHUTDOWN)
    }

    /// Leave software shutdown
    pub fn wake(&mut self) -> MatrixResult<I> {
        debug!("leaving software shutdown");
        self.write_function_register(SHUTDOWN, NORMAL_OPERATION)
    }

    /// Write a function page register, then restore the frame page
    fn write_function_register(&mut self, register: u8, value: u8) -> MatrixResult<I> {
        self.interface.write_register(COMMAND, PAGE_FUNCTION)?;
        self.interface.write_register(register, value)?;
        self.interface.write_register(COMMAND, PAGE_FRAME)
    }

    /// Access the underlying register transport
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Destroy the driver and release the owned transport
    pub fn release(self) -> I {
        self.interface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::PWM_LEN;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct MockInterface {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    #[derive(Debug, PartialEq)]
    struct MockBusError;

    impl RegisterInterface for MockInterface {
        type Error = MockBusError;

        fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockBusError);
            }
            self.writes.push((register, alloc::vec![value]));
            Ok(())
        }

        fn write_register_block(
            &mut self,
            register: u8,
            values: &[u8],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockBusError);
            }
            self.writes.push((register, values.to_vec()));
            Ok(())
        }
    }

    #[test]
    fn test_init_sequence_order_and_values() {
        let mut matrix = Matrix::new(MockInterface::default());
        matrix.init().unwrap();

        let writes = &matrix.interface().writes;
        assert_eq!(writes.len(), 10);

        assert_eq!(writes[0], (0xFD, alloc::vec![0x0B]));
        assert_eq!(writes[1], (0x00, alloc::vec![0x00]));
        assert_eq!(writes[2], (0x01, alloc::vec![0x00]));
        assert_eq!(writes[3], (0x02, alloc::vec![0x00]));
        assert_eq!(writes[4], (0x03, alloc::vec![0x00]));
        assert_eq!(writes[5], (0x06, alloc::vec![0x00]));
        assert_eq!(writes[6], (0x0A, alloc::vec![0x01]));
        assert_eq!(writes[7], (0xFD, alloc::vec![0x00]));

        let (register, enable) = &writes[8];
        assert_eq!(*register, 0x00);
        assert_eq!(enable.len(), 18);
        assert!(enable[..17].iter().all(|&b| b == 0x7F));
        assert_eq!(enable[17], 0x00);

        assert_eq!(writes[9], (0xFD, alloc::vec![0x00]));
    }

    #[test]
    fn test_draw_is_one_full_block_write() {
        let mut matrix = Matrix::new(MockInterface::default());
        matrix.draw(&Frame::new()).unwrap();

        let writes = &matrix.interface().writes;
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, PWM);
        assert_eq!(writes[0].1.len(), PWM_LEN);
    }

    #[test]
    fn test_draw_places_remapped_pixel() {
        let mut frame = Frame::new();
        frame.set(0, 0, 0x0F);

        let mut matrix = Matrix::new(MockInterface::default());
        matrix.draw(&frame).unwrap();

        let payload = &matrix.interface().writes[0].1;
        assert_eq!(payload[126], 0x0F);
        assert_eq!(payload.iter().filter(|&&b| b == 0x0F).count(), 1);
    }

    #[test]
    fn test_shutdown_brackets_the_function_page() {
        let mut matrix = Matrix::new(MockInterface::default());
        matrix.shutdown().unwrap();

        let writes = &matrix.interface().writes;
        assert_eq!(writes.len(), 3);
        assert_eq!(writes[0], (0xFD, alloc::vec![0x0B]));
        assert_eq!(writes[1], (0x0A, alloc::vec![0x00]));
        assert_eq!(writes[2], (0xFD, alloc::vec![0x00]));
    }

    #[test]
    fn test_wake_restores_normal_operation() {
        let mut matrix = Matrix::new(MockInterface::default());
        matrix.wake().unwrap();

        let writes = &matrix.interface().writes;
        assert_eq!(writes[1], (0x0A, alloc::vec![0x01]));
    }

    #[test]
    fn test_bus_error_propagates() {
        let mut matrix = Matrix::new(MockInterface {
            writes: Vec::new(),
            fail: true,
        });
        assert_eq!(matrix.init(), Err(MockBusError));
        assert_eq!(matrix.draw(&Frame::new()), Err(MockBusError));
    }
}
