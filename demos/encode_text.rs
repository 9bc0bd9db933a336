use static_huffman::{compress_text, decompress_text};
use std::env;
use std::fs;

fn main() {
    let s = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path).expect("First argument was not a readable text file."),
        None => String::from("Hello my name is Sam!"),
    };

    let artifact = compress_text(&s).unwrap();
    fs::write("encoded.txt", &artifact).unwrap();

    let dec = decompress_text(&fs::read_to_string("encoded.txt").unwrap());
    fs::write("decoded.txt", dec.as_deref().unwrap_or_default()).unwrap();

    println!("{:?}", dec);
}
