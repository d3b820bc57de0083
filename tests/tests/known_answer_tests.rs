//! Known-answer tests against the bundled NIST SP 800-38A and FIPS-197 files
//!
//! Every vector is run through both the generic mode drivers and the
//! `AesContext` facade.

use rijndael::AesContext;
use rijndael_algorithms::block::{Aes, Cbc, Ctr, Ecb};
use rijndael_algorithms::types::Iv;
use rijndael_params::utils::symmetric::AES_BLOCK_SIZE;
use rijndael_tests::vectors::{self, AesVector, Direction};

const KEY_SIZES: [u32; 3] = [128, 192, 256];

fn load(mode: &str, bits: u32) -> Vec<AesVector> {
    let file = format!("{}/{}-AES{}.rsp", mode.to_lowercase(), mode, bits);
    vectors::load(&file).unwrap_or_else(|e| panic!("{}: {}", file, e))
}

fn iv_of(vector: &AesVector) -> Iv {
    Iv::from_slice(vector.iv.as_deref().expect("vector has no IV")).unwrap()
}

#[test]
fn test_ecb_vectors() {
    for bits in KEY_SIZES {
        for v in load("ECB", bits) {
            let ecb = Ecb::new(Aes::new(&v.key).unwrap());
            let mut buf = v.input().to_vec();
            match v.direction {
                Direction::Encrypt => ecb.encrypt_in_place(&mut buf).unwrap(),
                Direction::Decrypt => ecb.decrypt_in_place(&mut buf).unwrap(),
            }
            assert_eq!(buf, v.expected(), "ECB-AES{} COUNT = {}", bits, v.count);

            let ctx = AesContext::new(&v.key).unwrap();
            let mut block = v.input().to_vec();
            match v.direction {
                Direction::Encrypt => ctx.ecb_encrypt(&mut block).unwrap(),
                Direction::Decrypt => ctx.ecb_decrypt(&mut block).unwrap(),
            }
            assert_eq!(block, v.expected(), "context ECB-AES{} COUNT = {}", bits, v.count);
        }
    }
}

#[test]
fn test_fips197_appendix_c() {
    let vectors = vectors::load("fips197/ECB-FIPS197.rsp").unwrap();
    assert_eq!(vectors.len(), 6);

    for v in vectors {
        let ctx = AesContext::new(&v.key).unwrap();
        assert_eq!(ctx.key_size().key_len(), v.key.len());

        let mut block = v.input().to_vec();
        match v.direction {
            Direction::Encrypt => ctx.ecb_encrypt(&mut block).unwrap(),
            Direction::Decrypt => ctx.ecb_decrypt(&mut block).unwrap(),
        }
        assert_eq!(block, v.expected(), "FIPS-197 COUNT = {}", v.count);
    }
}

#[test]
fn test_cbc_vectors() {
    for bits in KEY_SIZES {
        for v in load("CBC", bits) {
            let mut cbc = Cbc::new(Aes::new(&v.key).unwrap(), &iv_of(&v));
            let mut buf = v.input().to_vec();
            match v.direction {
                Direction::Encrypt => cbc.encrypt_in_place(&mut buf).unwrap(),
                Direction::Decrypt => cbc.decrypt_in_place(&mut buf).unwrap(),
            }
            assert_eq!(buf, v.expected(), "CBC-AES{} COUNT = {}", bits, v.count);

            let mut ctx = AesContext::with_iv(&v.key, v.iv.as_deref().unwrap()).unwrap();
            let mut buf = v.input().to_vec();
            match v.direction {
                Direction::Encrypt => ctx.cbc_encrypt_buffer(&mut buf).unwrap(),
                Direction::Decrypt => ctx.cbc_decrypt_buffer(&mut buf).unwrap(),
            }
            assert_eq!(buf, v.expected(), "context CBC-AES{} COUNT = {}", bits, v.count);
            assert_eq!(&ctx.iv()[..], &v.ciphertext[v.ciphertext.len() - AES_BLOCK_SIZE..]);
        }
    }
}

#[test]
fn test_ctr_vectors() {
    for bits in KEY_SIZES {
        for v in load("CTR", bits) {
            let mut ctr = Ctr::new(Aes::new(&v.key).unwrap(), &iv_of(&v));
            let mut buf = v.input().to_vec();
            ctr.process(&mut buf).unwrap();
            assert_eq!(buf, v.expected(), "CTR-AES{} COUNT = {}", bits, v.count);

            let mut ctx = AesContext::with_iv(&v.key, v.iv.as_deref().unwrap()).unwrap();
            let mut buf = v.input().to_vec();
            ctx.ctr_xcrypt_buffer(&mut buf).unwrap();
            assert_eq!(buf, v.expected(), "context CTR-AES{} COUNT = {}", bits, v.count);
        }
    }
}

#[test]
fn test_piecewise_processing_matches_vectors() {
    for bits in KEY_SIZES {
        for v in load("CBC", bits) {
            if v.direction != Direction::Encrypt {
                continue;
            }
            let mut ctx = AesContext::with_iv(&v.key, v.iv.as_deref().unwrap()).unwrap();
            let mut buf = v.plaintext.clone();
            for block in buf.chunks_mut(AES_BLOCK_SIZE) {
                ctx.cbc_encrypt_buffer(block).unwrap();
            }
            assert_eq!(buf, v.ciphertext, "CBC-AES{} COUNT = {}", bits, v.count);
        }

        for v in load("CTR", bits) {
            if v.direction != Direction::Encrypt {
                continue;
            }
            // Only the last piece may end inside a block
            let mut ctx = AesContext::with_iv(&v.key, v.iv.as_deref().unwrap()).unwrap();
            let mut buf = v.plaintext.clone();
            for piece in buf.chunks_mut(AES_BLOCK_SIZE) {
                ctx.ctr_xcrypt_buffer(piece).unwrap();
            }
            assert_eq!(buf, v.ciphertext, "context CTR-AES{} COUNT = {}", bits, v.count);

            // The driver keeps the keystream remainder, so uneven pieces work
            let mut ctr = Ctr::new(Aes::new(&v.key).unwrap(), &iv_of(&v));
            let mut buf = v.plaintext.clone();
            for piece in buf.chunks_mut(7) {
                ctr.process(piece).unwrap();
            }
            assert_eq!(buf, v.ciphertext, "CTR-AES{} COUNT = {}", bits, v.count);
        }
    }
}
