use crate::bn254::{BN254Fq, BN254Gt, BN254Scalar, BN254G1, BN254G2};
use crate::prelude::*;

/// Derive serde through [`ZslFromToBytes`]: base64 strings for
/// human-readable formats, raw bytes otherwise.
#[macro_export]
macro_rules! serialize_deserialize {
    ($t:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                if serializer.is_human_readable() {
                    serializer.serialize_str(&$crate::utils::b64enc(
                        &$crate::serialization::ZslFromToBytes::zsl_to_bytes(self),
                    ))
                } else {
                    serializer.serialize_bytes(
                        &$crate::serialization::ZslFromToBytes::zsl_to_bytes(self),
                    )
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bytes = if deserializer.is_human_readable() {
                    deserializer
                        .deserialize_str($crate::serialization::zsl_obj_serde::BytesVisitor)?
                } else {
                    deserializer
                        .deserialize_bytes($crate::serialization::zsl_obj_serde::BytesVisitor)?
                };
                <$t as $crate::serialization::ZslFromToBytes>::zsl_from_bytes(bytes.as_slice())
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Helper trait to serialize objects through a canonical byte encoding.
pub trait ZslFromToBytes: Sized {
    /// Convert to bytes.
    fn zsl_to_bytes(&self) -> Vec<u8>;
    /// Reconstruct from bytes.
    fn zsl_from_bytes(bytes: &[u8]) -> Result<Self>;
}

macro_rules! to_from_bytes_scalar {
    ($t:ident) => {
        impl ZslFromToBytes for $t {
            fn zsl_to_bytes(&self) -> Vec<u8> {
                self.to_bytes()
            }
            fn zsl_from_bytes(bytes: &[u8]) -> Result<$t> {
                $t::from_bytes(bytes).map_err(|_| AlgebraError::DeserializationError)
            }
        }
    };
}

to_from_bytes_scalar!(BN254Scalar);
to_from_bytes_scalar!(BN254Fq);

serialize_deserialize!(BN254Scalar);
serialize_deserialize!(BN254Fq);

macro_rules! to_from_bytes_group {
    ($g:ident) => {
        impl ZslFromToBytes for $g {
            fn zsl_to_bytes(&self) -> Vec<u8> {
                self.to_compressed_bytes()
            }
            fn zsl_from_bytes(bytes: &[u8]) -> Result<$g> {
                $g::from_compressed_bytes(bytes).map_err(|_| AlgebraError::DeserializationError)
            }
        }
    };
}

to_from_bytes_group!(BN254G1);
to_from_bytes_group!(BN254G2);
to_from_bytes_group!(BN254Gt);

serialize_deserialize!(BN254G1);
serialize_deserialize!(BN254G2);
serialize_deserialize!(BN254Gt);

/// Length-prefixed byte layout for vectors of [`ZslFromToBytes`] values.
///
/// The prefix is the number of elements as a little-endian `u64`; every
/// element carries its own little-endian `u64` byte length.
pub mod zsl_vec_bytes {
    use super::ZslFromToBytes;
    use crate::prelude::*;
    use byteorder::{ByteOrder, LittleEndian};

    /// Append `v` to `out`.
    pub fn write<T: ZslFromToBytes>(out: &mut Vec<u8>, v: &[T]) {
        let mut len = [0u8; 8];
        LittleEndian::write_u64(&mut len, v.len() as u64);
        out.extend_from_slice(&len);
        for e in v {
            write_one(out, e);
        }
    }

    /// Append a single element to `out`.
    pub fn write_one<T: ZslFromToBytes>(out: &mut Vec<u8>, e: &T) {
        let bytes = e.zsl_to_bytes();
        let mut len = [0u8; 8];
        LittleEndian::write_u64(&mut len, bytes.len() as u64);
        out.extend_from_slice(&len);
        out.extend_from_slice(&bytes);
    }

    /// Read a vector from the front of `bytes`, advancing the slice.
    pub fn read<T: ZslFromToBytes>(bytes: &mut &[u8]) -> Result<Vec<T>> {
        let n = read_u64(bytes)? as usize;
        // every element takes at least its 8-byte length prefix
        if n > bytes.len() / 8 {
            return Err(AlgebraError::DeserializationError);
        }
        let mut res = Vec::with_capacity(n);
        for _ in 0..n {
            res.push(read_one(bytes)?);
        }
        Ok(res)
    }

    /// Read a single element from the front of `bytes`, advancing the slice.
    pub fn read_one<T: ZslFromToBytes>(bytes: &mut &[u8]) -> Result<T> {
        let len = read_u64(bytes)? as usize;
        if bytes.len() < len {
            return Err(AlgebraError::DeserializationError);
        }
        let (head, tail) = bytes.split_at(len);
        let e = T::zsl_from_bytes(head)?;
        *bytes = tail;
        Ok(e)
    }

    fn read_u64(bytes: &mut &[u8]) -> Result<u64> {
        if bytes.len() < 8 {
            return Err(AlgebraError::DeserializationError);
        }
        let (head, tail) = bytes.split_at(8);
        *bytes = tail;
        Ok(LittleEndian::read_u64(head))
    }
}

/// Serde helpers shared by every [`serialize_deserialize!`] invocation.
pub mod zsl_obj_serde {
    use crate::prelude::*;
    use serde::de::SeqAccess;
    use serde::de::Visitor;

    /// Visitor accepting raw bytes, byte sequences or base64 strings.
    pub struct BytesVisitor;

    impl<'de> Visitor<'de> for BytesVisitor {
        type Value = Vec<u8>;

        fn expecting(&self, formatter: &mut ::core::fmt::Formatter) -> core::fmt::Result {
            formatter.write_str("a valid ZslFromToBytes object")
        }

        fn visit_seq<V>(self, mut seq: V) -> core::result::Result<Vec<u8>, V::Error>
        where
            V: SeqAccess<'de>,
        {
            let mut vec: Vec<u8> = vec![];
            while let Some(x) = seq.next_element()? {
                vec.push(x);
            }
            Ok(vec)
        }

        fn visit_bytes<E>(self, v: &[u8]) -> core::result::Result<Vec<u8>, E> {
            Ok(v.to_vec())
        }

        fn visit_byte_buf<E>(self, v: Vec<u8>) -> core::result::Result<Vec<u8>, E> {
            Ok(v)
        }

        fn visit_str<E>(self, v: &str) -> core::result::Result<Vec<u8>, E>
        where
            E: serde::de::Error,
        {
            b64dec(v).map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod test {
    use super::{zsl_vec_bytes, ZslFromToBytes};
    use crate::bn254::{BN254Fq, BN254Gt, BN254Scalar, BN254G1, BN254G2};
    use crate::prelude::*;

    fn check_serde<T>(v: &T)
    where
        T: serde::Serialize + for<'de> serde::Deserialize<'de> + PartialEq + core::fmt::Debug,
    {
        let json = serde_json::to_string(v).unwrap();
        let back: T = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, v);

        let bin = bincode::serialize(v).unwrap();
        let back: T = bincode::deserialize(&bin).unwrap();
        assert_eq!(&back, v);
    }

    #[test]
    fn serde_of_algebraic_values() {
        let mut prng = test_rng();
        check_serde(&BN254Scalar::random(&mut prng));
        check_serde(&BN254Fq::random(&mut prng));
        check_serde(&BN254G1::random(&mut prng));
        check_serde(&BN254G2::random(&mut prng));
        check_serde(&BN254Gt::random(&mut prng));
        check_serde(&BN254G1::get_identity());
    }

    #[test]
    fn json_is_base64_string() {
        let s = BN254Scalar::from(7u32);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, format!("\"{}\"", b64enc(&s.zsl_to_bytes())));
        assert!(serde_json::from_str::<BN254G1>("\"not a point\"").is_err());
    }

    #[test]
    fn vector_layout() {
        let mut prng = test_rng();
        let points: Vec<BN254G1> = (0..4).map(|_| BN254G1::random(&mut prng)).collect();
        let scalar = BN254Scalar::random(&mut prng);

        let mut bytes = vec![];
        zsl_vec_bytes::write(&mut bytes, &points);
        zsl_vec_bytes::write_one(&mut bytes, &scalar);
        assert_eq!(bytes.len(), 8 + 4 * (8 + 32) + 8 + 32);

        let mut cursor = bytes.as_slice();
        let back: Vec<BN254G1> = zsl_vec_bytes::read(&mut cursor).unwrap();
        let back_scalar: BN254Scalar = zsl_vec_bytes::read_one(&mut cursor).unwrap();
        assert!(cursor.is_empty());
        assert_eq!(back, points);
        assert_eq!(back_scalar, scalar);

        let mut truncated = &bytes[..bytes.len() - 1];
        let _: Vec<BN254G1> = zsl_vec_bytes::read(&mut truncated).unwrap();
        assert!(zsl_vec_bytes::read_one::<BN254Scalar>(&mut truncated).is_err());
    }
}
