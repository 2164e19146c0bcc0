//! Helpers shared by the integration tests.

/// Turns a PTR query into the answer a nameserver would send, naming
/// `hostname` with a compressed owner name.
pub fn ptr_answer(query: &[u8], hostname: &str) -> Vec<u8> {
    let mut answer = query.to_vec();
    answer[2] |= 0x80;
    answer[7] = 1;
    answer.extend_from_slice(&[0xC0, 0x0C, 0, 12, 0, 1, 0, 0, 0, 60]);

    let mut rdata = Vec::new();
    for label in hostname.split('.') {
        rdata.push(label.len() as u8);
        rdata.extend_from_slice(label.as_bytes());
    }
    rdata.push(0);

    answer.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    answer.extend_from_slice(&rdata);
    answer
}
