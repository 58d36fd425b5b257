//! Constants for Diffie-Hellman key exchange

/// DH with 2048-bit modulus
pub const DH_MODULUS_2048: u64 = 2048;

/// DH with 3072-bit modulus
pub const DH_MODULUS_3072: u64 = 3072;

/// DH with 4096-bit modulus
pub const DH_MODULUS_4096: u64 = 4096;

/// Generator shared by all RFC 3526 MODP groups
pub const DH_RFC3526_GENERATOR: u32 = 2;

/// RFC 3526 MODP Group 14 prime (2048 bits), big-endian hex
pub const DH_MODP_2048_PRIME: &str = "\
FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74\
020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F1437\
4FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED\
EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF05\
98DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C62F356208552BB\
9ED529077096966D670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B\
E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF695581718\
3995497CEA956AE515D2261898FA051015728E5A8AACAA68FFFFFFFFFFFFFFFF";
