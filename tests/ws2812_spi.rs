mod tests {
    use bias_light::transmit::Transmitter;
    use bias_light::ws2812_spi::{
        RESET_LEN, SPI_BYTES_PER_BYTE, Ws2812SpiError, buffer_len, encode_byte,
    };
    use bias_light::{FrameBuffer, Rgb, Ws2812Spi};
    use embedded_hal::spi::{ErrorKind, ErrorType, SpiBus};

    /// SPI bus that records every write call
    #[derive(Default)]
    struct RecordingSpi {
        writes: Vec<Vec<u8>>,
        flushes: usize,
        fail: bool,
    }

    impl RecordingSpi {
        fn written(&self) -> Vec<u8> {
            self.writes.concat()
        }
    }

    impl ErrorType for RecordingSpi {
        type Error = ErrorKind;
    }

    impl SpiBus for RecordingSpi {
        fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            words.fill(0);
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            self.writes.push(words.to_vec());
            Ok(())
        }

        fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
            read.fill(0);
            self.write(write)
        }

        fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            self.write(words)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_encode_byte_patterns() {
        assert_eq!(encode_byte(0x00), [0b1000_1000; 4]);
        assert_eq!(encode_byte(0xFF), [0b1110_1110; 4]);
        assert_eq!(
            encode_byte(0b1001_0110),
            [0b1110_1000, 0b1000_1110, 0b1000_1110, 0b1110_1000]
        );
    }

    #[test]
    fn test_buffer_len() {
        assert_eq!(buffer_len(0), RESET_LEN);
        assert_eq!(buffer_len(60), 60 * 3 * SPI_BYTES_PER_BYTE + RESET_LEN);
    }

    #[test]
    fn test_transmit_writes_frame_and_reset() {
        let mut strip = Ws2812Spi::<_, { buffer_len(1) }>::new(RecordingSpi::default());
        strip.transmit(&[0x00, 0xFF, 0x0F]).unwrap();

        let spi = strip.release();
        let written = spi.written();
        assert_eq!(written.len(), 3 * SPI_BYTES_PER_BYTE + RESET_LEN);
        assert_eq!(&written[..4], &encode_byte(0x00));
        assert_eq!(&written[4..8], &encode_byte(0xFF));
        assert_eq!(&written[8..12], &encode_byte(0x0F));
        assert!(written[12..].iter().all(|byte| *byte == 0));
        assert_eq!(spi.flushes, 1);
    }

    #[test]
    fn test_transmit_full_strip_in_one_write() {
        let mut frame = FrameBuffer::<60>::new();
        frame.pixels_mut().fill(Rgb { r: 50, g: 10, b: 0 });
        let mut strip = Ws2812Spi::<_, { buffer_len(60) }>::new(RecordingSpi::default());

        strip.transmit(frame.encode()).unwrap();

        let spi = strip.release();
        assert_eq!(spi.writes.len(), 1);
        assert_eq!(spi.writes[0].len(), buffer_len(60));
        assert_eq!(&spi.writes[0][..4], &encode_byte(10));
        assert_eq!(&spi.writes[0][4..8], &encode_byte(50));
    }

    #[test]
    fn test_transmit_shorter_frame_than_buffer() {
        let mut strip = Ws2812Spi::<_, { buffer_len(10) }>::new(RecordingSpi::default());
        strip.transmit(&[1, 2, 3, 4, 5, 6]).unwrap();

        let spi = strip.release();
        assert_eq!(spi.writes.len(), 1);
        assert_eq!(spi.writes[0].len(), buffer_len(2));
    }

    #[test]
    fn test_transmit_rejects_oversized_frame() {
        let mut strip = Ws2812Spi::<_, { buffer_len(1) }>::new(RecordingSpi::default());

        assert_eq!(
            strip.transmit(&[0; 6]),
            Err(Ws2812SpiError::BufferTooSmall {
                needed: buffer_len(2)
            })
        );
        assert!(strip.release().writes.is_empty());
    }

    #[test]
    fn test_transmit_propagates_bus_error() {
        let mut strip = Ws2812Spi::<_, { buffer_len(1) }>::new(RecordingSpi {
            fail: true,
            ..Default::default()
        });
        assert_eq!(
            strip.transmit(&[1, 2, 3]),
            Err(Ws2812SpiError::Spi(ErrorKind::Other))
        );
    }
}
