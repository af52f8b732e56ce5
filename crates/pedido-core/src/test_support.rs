//! In-memory PDF fixtures for tests.
//!
//! Compiled for this crate's unit tests and, through the `test-support`
//! feature, for the CLI integration tests.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};
use md5::{Digest, Md5};

/// Password padding string of the standard security handler.
const PASSWORD_PAD: [u8; 32] = [
    0x28, 0xBF, 0x4E, 0x5E, 0x4E, 0x75, 0x8A, 0x41, 0x64, 0x00, 0x4E, 0x56, 0xFF, 0xFA, 0x01, 0x08,
    0x2E, 0x2E, 0x00, 0xB6, 0xD0, 0x68, 0x3E, 0x80, 0x2F, 0x0C, 0xA9, 0xFE, 0x64, 0x53, 0x69, 0x7A,
];

const PERMISSIONS: i64 = -4;
const KEY_LEN: usize = 16;
const FILE_ID: &[u8; 16] = b"pedido-fixture-1";

/// Build a text PDF with one page per entry, one text line per string.
///
/// Lines are drawn in Helvetica, so keep them ASCII.
pub fn make_pdf(pages: &[&[&str]]) -> Vec<u8> {
    save(build_document(pages, true))
}

/// A PDF whose catalog points at an empty page tree.
pub fn make_empty_pdf() -> Vec<u8> {
    save(build_document(&[], true))
}

/// A one-page PDF that selects font `F1` but carries no `/Resources`
/// anywhere in its page tree.
pub fn make_pdf_without_resources(lines: &[&str]) -> Vec<u8> {
    save(build_document(&[lines], false))
}

/// A one-page PDF encrypted with RC4-128 under an empty user password.
pub fn make_encrypted_pdf(lines: &[&str]) -> Vec<u8> {
    let mut doc = build_document(&[lines], true);

    // Owner entry only feeds the key hash
    let owner = [0x4F_u8; 32];
    let key = file_key(&owner);

    for (&id, object) in doc.objects.iter_mut() {
        if let Object::Stream(stream) = object {
            let encrypted = rc4(&object_key(&key, id), &stream.content);
            stream.set_content(encrypted);
        }
    }

    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 2,
        "R" => 3,
        "Length" => (KEY_LEN * 8) as i64,
        "P" => PERMISSIONS,
        "O" => Object::String(owner.to_vec(), StringFormat::Hexadecimal),
        "U" => Object::String(user_entry(&key), StringFormat::Hexadecimal),
        "CF" => dictionary! {
            "StdCF" => dictionary! {
                "CFM" => "V2",
                "Length" => KEY_LEN as i64,
            },
        },
        "StmF" => "StdCF",
        "StrF" => "StdCF",
    });
    doc.trailer.set("Encrypt", encrypt_id);
    doc.trailer.set(
        "ID",
        vec![
            Object::String(FILE_ID.to_vec(), StringFormat::Hexadecimal),
            Object::String(FILE_ID.to_vec(), StringFormat::Hexadecimal),
        ],
    );

    save(doc)
}

fn build_document(pages: &[&[&str]], with_resources: bool) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids = Vec::with_capacity(pages.len());
    for lines in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
        ];
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                operations.push(Operation::new("Td", vec![0.into(), (-18).into()]));
            }
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("fixture content encodes"),
        ));
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
        };
        if with_resources {
            page.set("Resources", resources_id);
        }
        kids.push(doc.add_object(page).into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("fixture PDF saves");
    buf
}

/// File key for the empty user password, revision 3.
fn file_key(owner: &[u8]) -> Vec<u8> {
    let mut hasher = Md5::new();
    hasher.update(PASSWORD_PAD);
    hasher.update(owner);
    hasher.update((PERMISSIONS as u32).to_le_bytes());
    hasher.update(FILE_ID);

    let mut key = hasher.finalize()[..KEY_LEN].to_vec();
    for _ in 0..50 {
        key = Md5::digest(&key)[..KEY_LEN].to_vec();
    }
    key
}

/// `/U` entry proving `key` belongs to the empty user password.
fn user_entry(key: &[u8]) -> Vec<u8> {
    let mut hasher = Md5::new();
    hasher.update(PASSWORD_PAD);
    hasher.update(FILE_ID);

    let mut entry = rc4(key, &hasher.finalize());
    for round in 1..=19u8 {
        let round_key: Vec<u8> = key.iter().map(|b| b ^ round).collect();
        entry = rc4(&round_key, &entry);
    }
    entry.extend_from_slice(&PASSWORD_PAD[..16]);
    entry
}

fn object_key(key: &[u8], (number, generation): ObjectId) -> Vec<u8> {
    let mut hasher = Md5::new();
    hasher.update(key);
    hasher.update(&number.to_le_bytes()[..3]);
    hasher.update(&generation.to_le_bytes()[..2]);

    let len = (key.len() + 5).min(16);
    hasher.finalize()[..len].to_vec()
}

fn rc4(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut s: [u8; 256] = std::array::from_fn(|i| i as u8);
    let mut j = 0u8;
    for i in 0..256 {
        j = j.wrapping_add(s[i]).wrapping_add(key[i % key.len()]);
        s.swap(i, j as usize);
    }

    let (mut i, mut j) = (0u8, 0u8);
    data.iter()
        .map(|byte| {
            i = i.wrapping_add(1);
            j = j.wrapping_add(s[i as usize]);
            s.swap(i as usize, j as usize);
            byte ^ s[s[i as usize].wrapping_add(s[j as usize]) as usize]
        })
        .collect()
}
