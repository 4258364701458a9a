use crate::error::DecodeError;

fn field<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], DecodeError> {
    let needed = offset + N;
    data.get(offset..needed)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(DecodeError::TooShort {
            needed,
            actual: data.len(),
        })
}

// Чтение u64 (LE)
pub fn read_u64(data: &[u8], offset: usize) -> Result<u64, DecodeError> {
    field::<8>(data, offset).map(u64::from_le_bytes)
}

// Чтение bool: любой ненулевой байт = true
pub fn read_bool(data: &[u8], offset: usize) -> Result<bool, DecodeError> {
    field::<1>(data, offset).map(|[byte]| byte != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_u64_at_offset() {
        let mut data = vec![0xffu8; 8];
        data.extend_from_slice(&0x0102_0304_0506_0708u64.to_le_bytes());

        assert_eq!(read_u64(&data, 8).unwrap(), 0x0102_0304_0506_0708);
        assert_eq!(read_u64(&data, 0).unwrap(), u64::MAX);
    }

    #[test]
    fn short_data_is_rejected() {
        let data = [0u8; 15];

        match read_u64(&data, 8) {
            Err(DecodeError::TooShort { needed, actual }) => {
                assert_eq!(needed, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(read_bool(&data, 15).is_err());
    }

    #[test]
    fn bool_is_any_non_zero_byte() {
        assert!(!read_bool(&[0], 0).unwrap());
        assert!(read_bool(&[1], 0).unwrap());
        assert!(read_bool(&[0, 7], 1).unwrap());
    }
}
