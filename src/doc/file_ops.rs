use serde_json::{Value, json};

use crate::model::{File, FileId};

use super::{
    DocError, SharedDoc, file_path, insert_op, name_path, remove_op, replace_op, text_path,
};

fn current(doc: &dyn SharedDoc, id: &FileId) -> Result<File, DocError> {
    doc.data()
        .file(id)
        .cloned()
        .ok_or_else(|| DocError::MissingFile(id.clone()))
}

pub fn create_file(
    doc: &mut dyn SharedDoc,
    id: FileId,
    name: &str,
    source: &str,
) -> Result<FileId, DocError> {
    let value = json!({ "name": name, "text": "" });
    doc.submit_op(insert_op(file_path(&id), value), source)?;
    Ok(id)
}

/// Fails with [`DocError::MissingFile`] when the file was deleted by another
/// session before the rename landed.
pub fn rename_file(
    doc: &mut dyn SharedDoc,
    id: &FileId,
    new_name: &str,
    source: &str,
) -> Result<(), DocError> {
    let file = current(doc, id)?;
    if file.name == new_name {
        return Ok(());
    }
    let op = replace_op(
        name_path(id),
        Value::String(file.name),
        Value::String(new_name.to_string()),
    );
    doc.submit_op(op, source)
}

pub fn delete_file(doc: &mut dyn SharedDoc, id: &FileId, source: &str) -> Result<(), DocError> {
    let file = current(doc, id)?;
    let old = serde_json::to_value(file).map_err(|e| DocError::InvalidValue {
        path: id.to_string(),
        reason: e.to_string(),
    })?;
    doc.submit_op(remove_op(file_path(id), old), source)
}

/// Deletes every file beneath `dir`. Returns how many were removed.
pub fn delete_directory(
    doc: &mut dyn SharedDoc,
    dir: &str,
    source: &str,
) -> Result<usize, DocError> {
    let ids = doc.data().files_under(dir);
    for id in &ids {
        delete_file(doc, id, source)?;
    }
    Ok(ids.len())
}

pub fn edit_text(
    doc: &mut dyn SharedDoc,
    id: &FileId,
    new_text: &str,
    source: &str,
) -> Result<(), DocError> {
    let file = current(doc, id)?;
    if file.text == new_text {
        return Ok(());
    }
    let op = replace_op(
        text_path(id),
        Value::String(file.text),
        Value::String(new_text.to_string()),
    );
    doc.submit_op(op, source)
}
