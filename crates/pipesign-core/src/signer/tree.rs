//! Recorrido recursivo del árbol de steps.

use log::debug;
use pipesign_domain::Step;

use super::{SignerOptions, SigningKey, StepSigner};
use crate::errors::SigningError;
use crate::signable::CommandStepWithInvariants;

/// Firma cada command step de `steps` en el lugar, recursando en los group
/// steps. Los steps se mutan directamente, así que un error a mitad de camino
/// puede dejar steps sin firmar: el llamador debe tratar el árbol completo
/// como no confiable ante cualquier error, sin persistirlo como firmado.
///
/// Recorrido secuencial, primero en profundidad y en orden de fuente: el
/// primer error (en ese orden) es el que se reporta. Un step de tipo
/// desconocido aborta de inmediato, fail-closed.
pub fn sign_steps<S>(steps: &mut [Step],
                     signer: &S,
                     key: &SigningKey,
                     repository_url: &str,
                     opts: &SignerOptions)
                     -> Result<(), SigningError>
    where S: StepSigner + ?Sized
{
    for step in steps.iter_mut() {
        match step {
            Step::Command(cmd) => {
                debug!("signing step command={:?}", cmd.command);
                let result = {
                    let unit = CommandStepWithInvariants::new(cmd, repository_url);
                    signer.sign(key, &unit, opts)
                };
                match result {
                    Ok(signature) => cmd.signature = Some(signature),
                    Err(cause) => {
                        return Err(SigningError::Step { command: cmd.command.clone(),
                                                        source: cause })
                    }
                }
            }
            Step::Group(group) => {
                debug!("signing group step label={:?} steps={}", group.group, group.steps.len());
                sign_steps(&mut group.steps, signer, key, repository_url, opts)
                    .map_err(|e| SigningError::Group(Box::new(e)))?;
            }
            // Un step desconocido significa que falta información semántica
            // del pipeline: podría haber algo que necesita firma y no la va a
            // recibir. Error ahora, no en la verificación.
            Step::Unknown(_) => return Err(SigningError::UnknownStepType),
        }
    }
    Ok(())
}
