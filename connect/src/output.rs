/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response shapes, one per operation.

use crate::model::{ContactFlow, Evaluation, SecurityProfile, Vocabulary};

shape! {
    /// The response of the `CreateContactFlow` operation.
    "CreateContactFlowResponse" => pub struct CreateContactFlowOutput {
        /// The identifier of the flow.
        "ContactFlowId" => contact_flow_id: string { set_contact_flow_id, with_contact_flow_id },
        /// The Amazon Resource Name (ARN) of the flow.
        "ContactFlowArn" => contact_flow_arn: string { set_contact_flow_arn, with_contact_flow_arn },
    }
}

shape! {
    /// The response of the `CreatePersistentContactAssociation` operation.
    "CreatePersistentContactAssociationResponse" => pub struct CreatePersistentContactAssociationOutput {
        /// The contactId from which a persistent chat session is started.
        /// This field is populated only for persistent chat.
        "ContinuedFromContactId" => continued_from_contact_id: string {
            set_continued_from_contact_id,
            with_continued_from_contact_id,
        },
    }
}

shape! {
    /// The response of the `DescribeContactFlow` operation.
    "DescribeContactFlowResponse" => pub struct DescribeContactFlowOutput {
        /// Information about the flow.
        "ContactFlow" => contact_flow: shape<ContactFlow> { set_contact_flow, with_contact_flow },
    }
}

shape! {
    /// The response of the `DescribeContactEvaluation` operation.
    "DescribeContactEvaluationResponse" => pub struct DescribeEvaluationOutput {
        /// Information about the evaluation form completed for a specific contact.
        "Evaluation" => evaluation: shape<Evaluation> { set_evaluation, with_evaluation },
    }
}

shape! {
    /// The response of the `DescribeSecurityProfile` operation.
    "DescribeSecurityProfileResponse" => pub struct DescribeSecurityProfileOutput {
        /// The security profile.
        "SecurityProfile" => security_profile: shape<SecurityProfile> {
            set_security_profile,
            with_security_profile,
        },
    }
}

shape! {
    /// The response of the `DescribeVocabulary` operation.
    "DescribeVocabularyResponse" => pub struct DescribeVocabularyOutput {
        /// A list of specific words that you want Contact Lens for Amazon Connect to recognize
        /// in your audio input.
        "Vocabulary" => vocabulary: shape<Vocabulary> { set_vocabulary, with_vocabulary },
    }
}
