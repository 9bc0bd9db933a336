use static_huffman::{compress, decompress, Artifact, PackedArtifact};
use std::env;
use std::fs;

fn main() {
    let fp = env::args().nth(1).expect("Please provide path to input file as first argument.");
    let packed_too = env::args().nth(2).as_deref() == Some("--packed");

    let input_bytes = fs::read(&fp).expect("First argument was not a valid filepath.");

    // encode scope - save to file
    {
        let artifact = compress(&input_bytes).expect("Input file is empty.");
        fs::write("encoded.txt", artifact.to_text()).unwrap();

        if packed_too {
            let data = rmp_serde::to_vec(&PackedArtifact::from(&artifact)).unwrap();
            fs::write("encoded.mp", data).unwrap();
        }
    }

    // decode scope - read from file
    {
        let file_data = fs::read("encoded.txt").unwrap();
        let artifact = Artifact::<u8>::from_bytes(&file_data).unwrap();
        let decoded = decompress(&artifact).unwrap();

        if packed_too {
            let file_data = fs::read("encoded.mp").unwrap();
            let packed: PackedArtifact<u8> = rmp_serde::from_slice(&file_data).unwrap();
            let from_packed = decompress(&packed.into_artifact().unwrap()).unwrap();
            assert_eq!(from_packed, decoded);
        }

        println!(
            "{}: {} bytes in, {} encoded bits, round trip {}",
            fp,
            input_bytes.len(),
            artifact.payload().len(),
            if decoded == input_bytes { "ok" } else { "FAILED" }
        );
        fs::write("decoded.bin", decoded).unwrap();
    }
}
