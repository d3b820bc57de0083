use rijndael_algorithms::{
    Aes256, BlockCipher, CounterPosition, Ctr, Iv, SecretBytes, TypedBlockCipher,
};

fn main() {
    // The key size is carried by the type: Aes256 only accepts SecretBytes<32>
    let key = SecretBytes::<32>::new([0x42; 32]);
    println!("Key: {:?}", key);

    let cipher = Aes256::new(&key);
    println!("Cipher: {} ({}-byte key)", cipher.name(), Aes256::key_size());

    // 12-byte fixed prefix followed by a 4-byte block counter
    let mut block = [0u8; 16];
    block[..12].copy_from_slice(&[0x24; 12]);
    let iv = Iv::new(block);

    let mut ctr = Ctr::with_counter_params(cipher, &iv, CounterPosition::Postfix, 4).unwrap();
    let ciphertext = ctr.encrypt(b"Hello, type system!").unwrap();
    println!("Ciphertext: {}", hex::encode(&ciphertext));
    println!("Next counter block: {}", hex::encode(ctr.counter_block()));
}
